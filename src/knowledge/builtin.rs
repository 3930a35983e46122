// Keys and values are champion ids as the draft tool receives them. An
// entry that matches no catalog id simply never fires.

use super::DamageType;

pub(super) const SYNERGIES: &[(&str, &[&str])] = &[
    // Knock-ups for Yasuo
    (
        "Yasuo",
        &[
            "Malphite", "Alistar", "Diana", "Janna", "Nautilus", "Gragas", "Yone", "Rakan", "Ornn",
            "Zac",
        ],
    ),
    // Wombo combo
    ("Miss Fortune", &["Amumu", "Leona", "Sona", "Galio", "Rell", "Jarvan IV"]),
    ("Orianna", &["Malphite", "Amumu", "Zac", "Nocturne", "Rengar"]),
    ("Katarina", &["Amumu", "Morgana", "Leona"]),
    // Bot lane
    ("Lucian", &["Braum", "Nami", "Thresh"]),
    ("KogMaw", &["Lulu", "Milio", "Janna"]),
    ("Samira", &["Nautilus", "Leona", "Rell", "Alistar"]),
    ("Kai'Sa", &["Nautilus", "Leona", "Pyke", "Blitzcrank"]),
    ("Xayah", &["Rakan"]),
    ("Jinx", &["Lulu", "Thresh", "Blitzcrank", "Tahm Kench"]),
    ("Draven", &["Janna", "Nami", "Thresh", "Leona"]),
    ("Ezreal", &["Karma", "Yuumi", "Lux"]),
    ("Caitlyn", &["Lux", "Morgana", "Zyra", "Karma"]),
    // Jungle + mid
    ("Master Yi", &["Taric", "Kayle", "Zilean"]),
];

/// Keyed by the threat; the values beat it.
pub(super) const COUNTERS: &[(&str, &[&str])] = &[
    // Anti-tank
    ("Vayne", &["Cho'Gath", "Sion", "Dr. Mundo", "Ornn", "Malphite"]),
    ("Fiora", &["K'Sante", "Ornn", "Sion"]),
    ("Trundle", &["Rammus", "Sejuani", "Ornn"]),
    // Anti-assassin
    ("Lissandra", &["Zed", "Fizz", "Leblanc", "Katarina"]),
    ("Malzahar", &["Yasuo", "Yone", "Katarina", "Zed"]),
    ("Poppy", &["Rengar", "Lee Sin", "Akali", "Yasuo", "Kayn"]),
    // Bot lane
    ("Caitlyn", &["Vayne", "Kai'Sa", "Samira"]),
    ("Yasuo", &["Miss Fortune", "Ezreal", "Jinx"]),
    ("Samira", &["Miss Fortune", "Jhin", "Kog'Maw"]),
    ("Morgana", &["Blitzcrank", "Thresh", "Nautilus", "Pyke"]),
    ("Sivir", &["Blitzcrank", "Caitlyn"]),
];

pub(super) const DAMAGE_TYPES: &[(&str, DamageType)] = &[
    ("Zed", DamageType::AD),
    ("Talon", DamageType::AD),
    ("Yasuo", DamageType::AD),
    ("Yone", DamageType::AD),
    ("Darius", DamageType::AD),
    ("Draven", DamageType::AD),
    ("Ahri", DamageType::AP),
    ("Lux", DamageType::AP),
    ("Syndra", DamageType::AP),
    ("Veigar", DamageType::AP),
    ("Karthus", DamageType::AP),
    ("Xerath", DamageType::AP),
    ("Malphite", DamageType::Tank),
    ("Ornn", DamageType::Tank),
    ("Sion", DamageType::Tank),
    ("Rammus", DamageType::Tank),
    ("Mundo", DamageType::Tank),
];
