#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CharacterStats {
    pub(crate) health: u32,
    pub(crate) mana: u32,
    pub(crate) attack: u32,
    pub(crate) defense: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Character {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) class: String,
    pub(crate) stats: CharacterStats,
    pub(crate) color_key: String,
}

const CHARACTER_ROSTER_JSON: &str = r#"[
  {
    "id": "warrior",
    "name": "Торин",
    "class": "Воин",
    "stats": { "health": 120, "mana": 30, "attack": 85, "defense": 70 },
    "color_key": "warrior"
  },
  {
    "id": "mage",
    "name": "Элара",
    "class": "Маг",
    "stats": { "health": 80, "mana": 120, "attack": 95, "defense": 40 },
    "color_key": "mage"
  },
  {
    "id": "rogue",
    "name": "Шейд",
    "class": "Разбойник",
    "stats": { "health": 95, "mana": 60, "attack": 90, "defense": 55 },
    "color_key": "rogue"
  }
]"#;

pub(crate) fn load_roster(
) -> Result<Vec<Character>, serde_path_to_error::Error<serde_json::Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(CHARACTER_ROSTER_JSON);
    serde_path_to_error::deserialize(&mut deserializer)
}

pub(crate) fn character_or_default(roster: &[Character], id: &str) -> Character {
    roster
        .iter()
        .find(|character| character.id == id)
        .cloned()
        .unwrap_or_else(default_character)
}

fn default_character() -> Character {
    Character {
        id: "mage".to_string(),
        name: "Элара".to_string(),
        class: "Маг".to_string(),
        stats: CharacterStats {
            health: 80,
            mana: 120,
            attack: 95,
            defense: 40,
        },
        color_key: "mage".to_string(),
    }
}

/// Fixed palette keyed by character id; unknown keys fall back to the mage
/// violet rather than failing.
pub(crate) fn glyph_color(color_key: &str) -> Rgba {
    match color_key {
        "warrior" => [0xea, 0x38, 0x4c, 0xff],
        "mage" => [0x9b, 0x87, 0xf5, 0xff],
        "rogue" => [0x7c, 0x3a, 0xed, 0xff],
        _ => [0x9b, 0x87, 0xf5, 0xff],
    }
}
