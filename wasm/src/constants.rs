// Default heuristic weights for counter scoring

// Time-to-kill ratio is multiplied by this
pub const TIME_TO_KILL_WEIGHT: f64 = 30.0;
// Per point of bonus damage against the enemy's armor classes
pub const BONUS_DAMAGE_WEIGHT: f64 = 5.0;
// Enemy cost over candidate cost is multiplied by this
pub const COST_EFFICIENCY_WEIGHT: f64 = 10.0;
pub const SPEED_EDGE_BONUS: f64 = 5.0;
pub const RANGE_EDGE_BONUS: f64 = 3.0;
// Flat boost for hand-curated counters
pub const MANUAL_COUNTER_BOOST: f64 = 25.0;

// Stand-in time when one side cannot damage the other
pub const EFFECTIVELY_INFINITE_TIME: f64 = 999.0;
// Damage per hit never drops below this, whatever the armor
pub const MIN_BASE_DAMAGE: f64 = 1.0;
// Candidate cost below this share of the enemy's counts as "significantly cheaper"
pub const CHEAP_COST_RATIO: f64 = 0.7;

pub const DEFAULT_RESULT_LIMIT: usize = 5;
