//! Character sheet text format.
//!
//! One `Key: Value` pair per line in a fixed order:
//!
//! ```text
//! Name: Thorin
//! Race: Dwarf
//! Class: Fighter
//! Description: Heir of Durin\nKing under the Mountain
//! Equipment:
//!   Weapon: Greatsword
//!   Gear: Chain mail
//!   Tools:
//!   Class Item:
//! RaceFeatures: Darkvision, resilience, poison resistance.
//! Strength: 15 (2)
//! ...
//! Charisma: 8 (-1)
//! ```
//!
//! Values are escaped (`\` as `\\`, newline as `\n`, carriage return as `\r`)
//! so free text can never break the line layout. The value is everything
//! after the first `:` and one following space, so colons inside values need
//! no escaping.

use charforge_domain::{
    ability_modifier, Ability, AbilityScore, AbilityScores, CharacterRecord, EquipmentCategory,
    EquipmentSelection,
};

use crate::error::StoreError;

const NAME: &str = "Name";
const RACE: &str = "Race";
const CLASS: &str = "Class";
const DESCRIPTION: &str = "Description";
const EQUIPMENT: &str = "Equipment";
const RACE_FEATURES: &str = "RaceFeatures";
const INDENT: &str = "  ";

/// A stored character read back from its text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheet {
    pub name: String,
    pub race: String,
    pub class: String,
    pub description: String,
    pub equipment: EquipmentSelection,
    pub race_features: String,
    pub scores: AbilityScores,
}

/// Renders a record in the stored text format.
pub fn render(record: &CharacterRecord) -> String {
    let mut out = String::new();
    push_line(&mut out, "", NAME, record.name());
    push_line(&mut out, "", RACE, record.race());
    push_line(&mut out, "", CLASS, record.class());
    push_line(&mut out, "", DESCRIPTION, record.description());
    out.push_str(EQUIPMENT);
    out.push_str(":\n");
    for (category, item) in record.equipment().entries() {
        push_line(&mut out, INDENT, category.label(), item.unwrap_or(""));
    }
    push_line(&mut out, "", RACE_FEATURES, record.race_features());
    for (ability, score) in record.scores().iter() {
        push_line(&mut out, "", ability.display_name(), &score.to_string());
    }
    out
}

fn push_line(out: &mut String, indent: &str, key: &str, value: &str) {
    out.push_str(indent);
    out.push_str(key);
    out.push(':');
    if !value.is_empty() {
        out.push(' ');
        out.push_str(&escape(value));
    }
    out.push('\n');
}

/// Escapes a value so it fits on one line.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverses [`escape`].
pub fn unescape(value: &str) -> Result<String, StoreError> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                return Err(StoreError::format(format!(
                    "Unknown escape sequence \\{}",
                    other
                )))
            }
            None => return Err(StoreError::format("Dangling escape at end of value")),
        }
    }
    Ok(out)
}

fn split_entry(line: &str) -> Result<(&str, &str), StoreError> {
    let (key, rest) = line
        .split_once(':')
        .ok_or_else(|| StoreError::format(format!("Expected 'Key: Value', got '{}'", line)))?;
    Ok((key, rest.strip_prefix(' ').unwrap_or(rest)))
}

fn parse_score(ability: Ability, value: &str) -> Result<AbilityScore, StoreError> {
    let bad = || StoreError::format(format!("Bad {} score '{}'", ability, value));
    let (score, modifier) = value
        .strip_suffix(')')
        .and_then(|v| v.split_once(" ("))
        .ok_or_else(bad)?;
    let score: i32 = score.trim().parse().map_err(|_| bad())?;
    let modifier: i32 = modifier.trim().parse().map_err(|_| bad())?;
    if modifier != ability_modifier(score) {
        return Err(StoreError::format(format!(
            "{} modifier {} does not match score {}",
            ability, modifier, score
        )));
    }
    Ok(AbilityScore::new(score))
}

/// Parses the stored text format back into a [`CharacterSheet`].
pub fn parse(text: &str) -> Result<CharacterSheet, StoreError> {
    let mut name = None;
    let mut race = None;
    let mut class = None;
    let mut description = None;
    let mut race_features = None;
    let mut equipment = EquipmentSelection::new();
    let mut scores: [Option<AbilityScore>; 6] = [None; 6];
    let mut in_equipment = false;

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        if let Some(entry) = line.strip_prefix(INDENT) {
            if !in_equipment {
                return Err(StoreError::format(format!("Unexpected indented line '{}'", line)));
            }
            let (key, value) = split_entry(entry)?;
            let category: EquipmentCategory = key
                .parse()
                .map_err(|e: charforge_domain::DomainError| StoreError::format(e.to_string()))?;
            let item = unescape(value)?;
            equipment.set(category, (!item.is_empty()).then_some(item));
            continue;
        }

        in_equipment = false;
        let (key, value) = split_entry(line)?;
        match key {
            NAME => name = Some(unescape(value)?),
            RACE => race = Some(unescape(value)?),
            CLASS => class = Some(unescape(value)?),
            DESCRIPTION => description = Some(unescape(value)?),
            RACE_FEATURES => race_features = Some(unescape(value)?),
            EQUIPMENT => in_equipment = true,
            other => {
                let ability: Ability = other
                    .parse()
                    .map_err(|_| StoreError::format(format!("Unknown key '{}'", other)))?;
                scores[ability.index()] = Some(parse_score(ability, value)?);
            }
        }
    }

    let missing = |key: &str| StoreError::format(format!("Missing '{}' line", key));
    let mut scores_out = [AbilityScore::new(0); 6];
    for ability in Ability::ALL {
        scores_out[ability.index()] =
            scores[ability.index()].ok_or_else(|| missing(ability.display_name()))?;
    }

    Ok(CharacterSheet {
        name: name.ok_or_else(|| missing(NAME))?,
        race: race.ok_or_else(|| missing(RACE))?,
        class: class.ok_or_else(|| missing(CLASS))?,
        description: description.ok_or_else(|| missing(DESCRIPTION))?,
        equipment,
        race_features: race_features.ok_or_else(|| missing(RACE_FEATURES))?,
        scores: AbilityScores::from_fn(|ability| scores_out[ability.index()]),
    })
}
