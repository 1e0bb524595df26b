use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const FIRST_NAMES: [&str; 50] = [
    "James", "David", "Christopher", "George", "Ronald", "John", "Richard", "Daniel", "Kenneth",
    "Anthony", "Robert", "Charles", "Paul", "Steven", "Kevin", "Michael", "Joseph", "Mark",
    "Edward", "Jason", "William", "Thomas", "Donald", "Brian", "Jeff", "Mary", "Jennifer", "Lisa",
    "Sandra", "Michelle", "Patricia", "Maria", "Nancy", "Donna", "Laura", "Linda", "Susan",
    "Karen", "Carol", "Sarah", "Barbara", "Margaret", "Betty", "Ruth", "Kimberly", "Elizabeth",
    "Dorothy", "Helen", "Sharon", "Deborah",
];

const LAST_NAMES: [&str; 50] = [
    "Smith", "Anderson", "Clark", "Wright", "Mitchell", "Johnson", "Thomas", "Rodriguez", "Lopez",
    "Perez", "Williams", "Jackson", "Lewis", "Hill", "Roberts", "Jones", "White", "Lee", "Scott",
    "Turner", "Brown", "Harris", "Walker", "Green", "Phillips", "Davis", "Martin", "Hall", "Adams",
    "Campbell", "Miller", "Thompson", "Allen", "Baker", "Parker", "Wilson", "Garcia", "Young",
    "Gonzalez", "Evans", "Moore", "Martinez", "Hernandez", "Nelson", "Edwards", "Taylor",
    "Robinson", "King", "Carter", "Collins",
];

/// Ticket range handed out when a roster is generated with tickets enabled
pub const TICKET_RANGE: std::ops::RangeInclusive<u32> = 20..=60;

/// A wheel participant. Immutable once the roster is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: Uuid,
    name: String,
    tickets: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, tickets: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            tickets,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tickets(&self) -> u32 {
        self.tickets
    }
}

/// "First Last" picked from fixed name lists
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}

/// Build a roster of `count` randomly named players.
///
/// With `use_tickets` every player draws a ticket count from [`TICKET_RANGE`];
/// otherwise everyone holds zero tickets and the wheel is split evenly.
pub fn generate_roster<R: Rng>(count: usize, use_tickets: bool, rng: &mut R) -> Vec<Player> {
    let players: Vec<Player> = (0..count)
        .map(|_| {
            let name = random_name(rng);
            let tickets = if use_tickets {
                rng.gen_range(TICKET_RANGE)
            } else {
                0
            };
            Player::new(name, tickets)
        })
        .collect();

    tracing::debug!(
        "Generated roster of {} players (tickets: {})",
        players.len(),
        use_tickets
    );
    players
}
