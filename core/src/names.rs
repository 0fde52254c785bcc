//! Deterministic person-name and phone generation from curated lists.
//!
//! Same RNG stream position always yields the same name. No external
//! name provider is involved.

use crate::rng::GeneratorRng;

pub struct NamePool;

impl NamePool {
    pub fn first_name(rng: &mut GeneratorRng) -> &'static str {
        *rng.choose(Self::first_names())
    }

    pub fn last_name(rng: &mut GeneratorRng) -> &'static str {
        *rng.choose(Self::last_names())
    }

    /// US-style phone number, "(NPA) NXX-XXXX". Area code and exchange
    /// avoid leading 0/1 like real numbering plans do.
    pub fn phone(rng: &mut GeneratorRng) -> String {
        let area = rng.int_in(201, 989);
        let exchange = rng.int_in(200, 999);
        let line = rng.int_in(0, 9999);
        format!("({area}) {exchange}-{line:04}")
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
            "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
            "Steven", "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "Timothy",
            "Jason", "Jeffrey", "Ryan", "Jacob", "Nicholas", "Eric", "Jonathan", "Stephen",
            "Justin", "Scott", "Brandon", "Benjamin", "Samuel", "Gregory", "Alexander",
            "Patrick", "Tyler", "Aaron", "Jose", "Adam", "Nathan", "Henry", "Zachary",
            "Peter", "Kyle", "Noah", "Ethan", "Mary", "Patricia", "Jennifer", "Linda",
            "Elizabeth", "Susan", "Jessica", "Sarah", "Karen", "Lisa", "Nancy", "Margaret",
            "Sandra", "Ashley", "Kimberly", "Emily", "Donna", "Michelle", "Carol", "Amanda",
            "Melissa", "Deborah", "Stephanie", "Rebecca", "Sharon", "Laura", "Cynthia",
            "Kathleen", "Amy", "Angela", "Anna", "Brenda", "Pamela", "Emma", "Nicole",
            "Helen", "Samantha", "Katherine", "Christine", "Debra", "Rachel", "Carolyn",
            "Janet", "Catherine", "Maria", "Heather", "Diane", "Ruth", "Julie", "Olivia",
            "Joyce", "Virginia",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
            "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
            "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson", "Walker",
            "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen", "Hill", "Flores",
            "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera", "Campbell", "Mitchell",
            "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner", "Diaz", "Parker",
            "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris", "Morales", "Murphy",
            "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson", "Bailey",
            "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson",
        ]
    }
}
