//! Built-in race and class tables.

use crate::entities::{ClassDefinition, RaceDefinition};
use crate::value_objects::{Ability, EquipmentCategory};

use Ability::*;
use EquipmentCategory::*;

fn race(name: &str, description: &str, features: &str, bonuses: &[(Ability, i32)]) -> RaceDefinition {
    bonuses.iter().fold(
        RaceDefinition::new(name, description, features),
        |race, &(ability, bonus)| race.with_bonus(ability, bonus),
    )
}

pub(super) fn races() -> Vec<RaceDefinition> {
    vec![
        race(
            "Human",
            "Humans hold to no single craft, so every undertaking comes easily to them.",
            "An extra +1 to every ability.",
            &[
                (Strength, 1),
                (Dexterity, 1),
                (Constitution, 1),
                (Intelligence, 1),
                (Wisdom, 1),
                (Charisma, 1),
            ],
        ),
        race(
            "Dragonborn",
            "A mystic race whose origins have never been fully uncovered.",
            "Draconic ancestry (elemental resistance and the breath weapon of their parent).",
            &[(Strength, 2), (Charisma, 1)],
        ),
        race(
            "Elf",
            "Adepts of forest magic and nature. They are nimble, wise and eloquent.",
            "Darkvision, protection from charm, innate magic.",
            &[(Dexterity, 2)],
        ),
        race(
            "Tiefling",
            "Mostly human, but with fiendish blood set firmly in their veins.",
            "Darkvision, fire resistance, infernal legacy (minor spellcasting).",
            &[(Intelligence, 1), (Charisma, 2)],
        ),
        race(
            "Dwarf",
            "A mountain folk known for their greed, magnificent beards and brute strength.",
            "Darkvision, resilience, poison resistance.",
            &[(Constitution, 2)],
        ),
        race(
            "Halfling",
            "Small folk who spend much of their free time resting and idling, not unlike the well-known hobbits.",
            "Darkvision, protection from fear, sleight of hand.",
            &[(Dexterity, 2)],
        ),
        race(
            "Gnome",
            "Not to be confused with dwarves. Gnomes live in meadows and forests and prefer mental work to brute force.",
            "Darkvision, magic resistance, gnomish cunning.",
            &[(Intelligence, 2)],
        ),
        race(
            "Half-Elf",
            "A blend of elves and humans who combine magical gifts with the adaptability they need to live among humans.",
            "Darkvision, resistance to charm, extra versatility.",
            &[(Dexterity, 1), (Charisma, 2)],
        ),
        race(
            "Half-Orc",
            "Of mixed human and orc descent, with the strength and will to survive inherited from the orcs.",
            "Darkvision, relentless fury, savage strength.",
            &[(Strength, 2), (Constitution, 1)],
        ),
        race(
            "Drow",
            "Elves whose origins differ from their woodland kin. Their distant ancestors were bound to the forces of evil.",
            "Darkvision, fire resistance, innate magic.",
            &[(Dexterity, 1), (Intelligence, 1), (Charisma, 1)],
        ),
    ]
}

fn class(
    name: &str,
    description: &str,
    weapons: &[&str],
    gear: &[&str],
    tools: &[&str],
    class_items: &[&str],
) -> ClassDefinition {
    ClassDefinition::new(name, description)
        .with_items(Weapon, weapons.iter().copied())
        .with_items(Gear, gear.iter().copied())
        .with_items(Tools, tools.iter().copied())
        .with_items(ClassItem, class_items.iter().copied())
}

pub(super) fn classes() -> Vec<ClassDefinition> {
    vec![
        class(
            "Bard",
            "Scholar, skald or scoundrel, a bard weaves magic from words and music to inspire allies, demoralize foes, create illusions and even heal wounds.",
            &["Rapier", "Longsword", "Dagger"],
            &["Leather armor", "Robe"],
            &["Entertainer's pack", "Diplomat's pack", "Scholar's books"],
            &["Lute", "Flute", "Violin"],
        ),
        class(
            "Barbarian",
            "Every barbarian shares one thing: rage. Unchecked, unquenchable and unthinking, like a cornered predator or the merciless blow of a hurricane.",
            &["Greataxe", "Warhammer", "Two handaxes"],
            &["Leather armor", "Chain mail", "Wraps"],
            &["Explorer's pack"],
            &["War horn"],
        ),
        class(
            "Fighter",
            "Questing knights, conquering warlords, royal champions and armored mercenaries all share a mastery of weapons, armor and the techniques of combat.",
            &["Greatsword", "Longsword", "Longbow"],
            &["Leather armor", "Chain mail"],
            &["Explorer's pack", "Dungeoneer's pack"],
            &[],
        ),
        class(
            "Wizard",
            "Adepts of high magic who draw on the subtle weave that permeates the universe to cast explosive fire, arcing lightning, subtle deception and blunt mind control.",
            &["Quarterstaff", "Dagger"],
            &["Robe"],
            &["Scholar's pack", "Component pouch"],
            &["Spellbook"],
        ),
        class(
            "Druid",
            "Calling on the elements or taking the shape of beasts, druids embody nature's resilience, adaptability and wrath as part of its indomitable will.",
            &["Battle staff", "Scimitar"],
            &["Leather armor", "Padded armor"],
            &["Explorer's pack"],
            &["Druidic staff"],
        ),
        class(
            "Cleric",
            "Intermediaries between the mortal world and the distant planes of the gods, clerics are as varied as the deities they serve.",
            &["Mace", "Warhammer"],
            &["Scale mail", "Chain mail", "Leather armor"],
            &["Explorer's pack", "Priest's pack"],
            &["Holy symbol and temple shield"],
        ),
        class(
            "Artificer",
            "Masters of awakening magic in ordinary objects, artificers treat magic as a complex system to decode and apply in spells and inventions.",
            &["Sword", "Light crossbow"],
            &["Studded leather armor", "Scale mail"],
            &["Thieves' tools", "Dungeoneer's pack"],
            &["Single-shot pistol"],
        ),
        class(
            "Warlock",
            "Seekers of the knowledge hidden in the fabric of the multiverse, bound by a pact with mysterious beings of otherworldly power.",
            &["Shortsword", "Light crossbow"],
            &["Leather armor"],
            &["Scholar's pack", "Dungeoneer's pack", "Component pouch"],
            &["Grimoire"],
        ),
        class(
            "Monk",
            "Whatever their discipline, monks share the ability to command the energy flowing through their bodies.",
            &["Quarterstaff", "Shortsword"],
            &["Wraps"],
            &["Explorer's pack", "Dungeoneer's pack"],
            &["Ki prayer beads"],
        ),
        class(
            "Paladin",
            "Whatever their origin and mission, paladins are united by their oath to stand against the forces of evil.",
            &["Greatsword", "Warhammer"],
            &["Chain mail", "Plate armor"],
            &["Explorer's pack", "Priest's pack"],
            &["Holy symbol"],
        ),
        class(
            "Rogue",
            "Rogues rely on skill, stealth and their foes' weak spots to get the upper hand in any situation.",
            &["Rapier", "Shortsword"],
            &["Hooded leather armor"],
            &["Burglar's pack", "Dungeoneer's pack", "Explorer's pack"],
            &["Daggers"],
        ),
        class(
            "Ranger",
            "Far from the bustle of cities, beyond the hedges that guard the farthest farms, rangers keep their unending watch.",
            &["Two scimitars", "Two shortswords"],
            &["Leather armor", "Scale mail"],
            &["Explorer's pack", "Dungeoneer's pack"],
            &["Longbow"],
        ),
        class(
            "Sorcerer",
            "Sorcerers carry magic granted at birth by an exotic bloodline, an otherworldly influence or exposure to unknown cosmic forces.",
            &["Two daggers", "Shortsword"],
            &["Robe"],
            &["Explorer's pack", "Dungeoneer's pack", "Component pouch"],
            &["Arcane family heirloom"],
        ),
    ]
}
