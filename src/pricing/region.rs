use crate::pricing::Factor;

/// German federal states priced by the region table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bundesland {
    Niedersachsen,
    Bremen,
    Brandenburg,
    Sachsen,
    SchleswigHolstein,
    Bayern,
    Hamburg,
    BadenWuerttemberg,
    NordrheinWestfalen,
    Berlin,
    SachsenAnhalt,
    RheinlandPfalz,
    Saarland,
    MecklenburgVorpommern,
    Hessen,
    Thueringen,
}

impl Bundesland {
    pub const ALL: [Bundesland; 16] = [
        Bundesland::Niedersachsen,
        Bundesland::Bremen,
        Bundesland::Brandenburg,
        Bundesland::Sachsen,
        Bundesland::SchleswigHolstein,
        Bundesland::Bayern,
        Bundesland::Hamburg,
        Bundesland::BadenWuerttemberg,
        Bundesland::NordrheinWestfalen,
        Bundesland::Berlin,
        Bundesland::SachsenAnhalt,
        Bundesland::RheinlandPfalz,
        Bundesland::Saarland,
        Bundesland::MecklenburgVorpommern,
        Bundesland::Hessen,
        Bundesland::Thueringen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Bundesland::Niedersachsen => "Niedersachsen",
            Bundesland::Bremen => "Bremen",
            Bundesland::Brandenburg => "Brandenburg",
            Bundesland::Sachsen => "Sachsen",
            Bundesland::SchleswigHolstein => "Schleswig-Holstein",
            Bundesland::Bayern => "Bayern",
            Bundesland::Hamburg => "Hamburg",
            Bundesland::BadenWuerttemberg => "Baden-Württemberg",
            Bundesland::NordrheinWestfalen => "Nordrhein-Westfalen",
            Bundesland::Berlin => "Berlin",
            Bundesland::SachsenAnhalt => "Sachsen-Anhalt",
            Bundesland::RheinlandPfalz => "Rheinland-Pfalz",
            Bundesland::Saarland => "Saarland",
            Bundesland::MecklenburgVorpommern => "Mecklenburg-Vorpommern",
            Bundesland::Hessen => "Hessen",
            Bundesland::Thueringen => "Thüringen",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Bundesland::Niedersachsen => 1.2,
            Bundesland::Bremen => 0.8,
            Bundesland::Brandenburg => 1.1,
            Bundesland::Sachsen => 0.9,
            Bundesland::SchleswigHolstein => 1.3,
            Bundesland::Bayern => 1.4,
            Bundesland::Hamburg => 0.95,
            Bundesland::BadenWuerttemberg => 1.25,
            Bundesland::NordrheinWestfalen => 1.35,
            Bundesland::Berlin => 0.75,
            Bundesland::SachsenAnhalt => 1.05,
            Bundesland::RheinlandPfalz => 1.4,
            Bundesland::Saarland => 0.85,
            Bundesland::MecklenburgVorpommern => 1.1,
            Bundesland::Hessen => 1.3,
            Bundesland::Thueringen => 0.9,
        }
    }

    /// Exact name match, ignoring case (including umlauts).
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|state| state.name().to_lowercase() == wanted)
    }
}

/// Region multiplier for a free-text registration office.
pub fn region_factor(registration_office: &str) -> Factor {
    match Bundesland::from_name(registration_office) {
        Some(state) => Factor::Known(state.factor()),
        None => Factor::Default,
    }
}
