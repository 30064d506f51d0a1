//! Interactive terminal front end.
//!
//! Reads one command per line and renders each wizard screen as plain text.
//! Lines starting with `:` are navigation (`:next`, `:back`, `:cancel`,
//! `:finish`); everything else is data for the current screen. End of input
//! quits from any screen without saving.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use charforge_domain::{
    validate_character_name, Ability, BaseChoice, Catalog, CharacterDraft, DomainError,
    EquipmentCategory, STANDARD_ARRAY,
};
use charforge_store::{sheet, CharacterStore};

use crate::wizard::{WizardEvent, WizardState};

enum Flow {
    Continue,
    Quit,
}

/// Terminal session driving the wizard against a catalog and a store.
pub struct Shell<'a, S, R, W> {
    catalog: &'a Catalog,
    store: &'a S,
    input: R,
    out: W,
    state: WizardState,
    draft: CharacterDraft,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: CharacterStore,
    R: BufRead,
    W: Write,
{
    pub fn new(catalog: &'a Catalog, store: &'a S, input: R, out: W) -> Self {
        Self {
            catalog,
            store,
            input,
            out,
            state: WizardState::Idle,
            draft: CharacterDraft::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let flow = match self.state {
                WizardState::Idle => self.main_menu()?,
                WizardState::SelectingRace => self.race_screen()?,
                WizardState::SelectingClass => self.class_screen()?,
                WizardState::AllocatingStats => self.stats_screen()?,
                WizardState::Describing => self.describe_screen()?,
                WizardState::SelectingEquipment => self.equipment_screen()?,
                WizardState::Listing => self.list_screen()?,
            };
            if let Flow::Quit = flow {
                break;
            }
        }
        self.out.flush()?;
        tracing::debug!(state = %self.state, "Shell finished");
        Ok(())
    }

    fn main_menu(&mut self) -> Result<Flow> {
        self.header()?;
        writeln!(self.out, "1) Create a character")?;
        writeln!(self.out, "2) Saved characters")?;
        writeln!(self.out, "3) Quit")?;
        let Some(line) = self.prompt("> ")? else {
            return Ok(Flow::Quit);
        };
        match line.to_lowercase().as_str() {
            "1" | "create" => {
                self.draft = CharacterDraft::new();
                self.navigate(WizardEvent::StartCreation)?;
            }
            "2" | "list" => self.navigate(WizardEvent::OpenList)?,
            "3" | "quit" | "q" => return Ok(Flow::Quit),
            other => self.notice(format!("Unknown option: {}", other))?,
        }
        Ok(Flow::Continue)
    }

    fn race_screen(&mut self) -> Result<Flow> {
        self.header()?;
        let chosen = self.draft.race().map(|r| r.name.clone());
        for (i, race) in self.catalog.races().iter().enumerate() {
            let mark = marker(chosen.as_deref() == Some(race.name.as_str()));
            writeln!(self.out, "{}{}) {} [{}]", mark, i + 1, race.name, race.bonus_summary())?;
            writeln!(self.out, "     {}", race.description)?;
            writeln!(self.out, "     Features: {}", race.features)?;
        }
        writeln!(self.out, "Pick a race by number or name. :next :cancel")?;

        let Some(line) = self.prompt("> ")? else {
            return Ok(Flow::Quit);
        };
        if let Some(event) = parse_command(&line) {
            self.navigate(event)?;
            return Ok(Flow::Continue);
        }
        let names: Vec<&str> = self.catalog.races().iter().map(|r| r.name.as_str()).collect();
        let Some(name) = pick(&names, &line).map(str::to_string) else {
            self.notice(format!("No such race: {}", line))?;
            return Ok(Flow::Continue);
        };
        match self.draft.select_race(self.catalog, &name) {
            Ok(()) => self.navigate(WizardEvent::Next)?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn class_screen(&mut self) -> Result<Flow> {
        self.header()?;
        let chosen = self.draft.class().map(|c| c.name.clone());
        for (i, class) in self.catalog.classes().iter().enumerate() {
            let mark = marker(chosen.as_deref() == Some(class.name.as_str()));
            writeln!(self.out, "{}{}) {}", mark, i + 1, class.name)?;
            writeln!(self.out, "     {}", class.description)?;
        }
        writeln!(self.out, "Pick a class by number or name. :next :back :cancel")?;

        let Some(line) = self.prompt("> ")? else {
            return Ok(Flow::Quit);
        };
        if let Some(event) = parse_command(&line) {
            self.navigate(event)?;
            return Ok(Flow::Continue);
        }
        let names: Vec<&str> = self.catalog.classes().iter().map(|c| c.name.as_str()).collect();
        let Some(name) = pick(&names, &line).map(str::to_string) else {
            self.notice(format!("No such class: {}", line))?;
            return Ok(Flow::Continue);
        };
        match self.draft.select_class(self.catalog, &name) {
            Ok(()) => self.navigate(WizardEvent::Next)?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn stats_screen(&mut self) -> Result<Flow> {
        self.header()?;
        let allocation = self.draft.allocation();
        let remaining = allocation
            .remaining_values()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let array = STANDARD_ARRAY.map(|v| v.to_string()).join(", ");
        writeln!(self.out, "Standard array: {}   unused: {}", array, remaining)?;
        for ability in Ability::ALL {
            let base = allocation.base(ability);
            let total = if base.is_assigned() {
                allocation.score(ability).to_string()
            } else {
                "-".to_string()
            };
            let options = allocation
                .choices_for(ability)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                self.out,
                "{} {:<12} base {:>2}  race {:+}  = {:<8} options: {}",
                ability.abbreviation(),
                ability.display_name(),
                base.to_string(),
                allocation.race_bonus(ability),
                total,
                options
            )?;
        }
        writeln!(
            self.out,
            "Assign with '<ability> <value>', clear with '<ability> -'. :next :back :cancel"
        )?;

        let Some(line) = self.prompt("> ")? else {
            return Ok(Flow::Quit);
        };
        if let Some(event) = parse_command(&line) {
            self.navigate(event)?;
            return Ok(Flow::Continue);
        }
        if let Err(err) = self.apply_assignment(&line) {
            self.report(&err)?;
        }
        Ok(Flow::Continue)
    }

    /// Applies one `<ability> <value>` line, refusing values not on offer.
    fn apply_assignment(&mut self, line: &str) -> Result<(), DomainError> {
        let mut parts = line.split_whitespace();
        let (Some(ability), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::parse(format!(
                "Expected '<ability> <value>', got '{}'",
                line
            )));
        };
        let ability = match ability.parse::<usize>() {
            Ok(n) if (1..=Ability::ALL.len()).contains(&n) => Ability::ALL[n - 1],
            _ => Ability::from_str(ability)?,
        };
        let choice = BaseChoice::from_str(value)?;

        let allocation = self.draft.allocation();
        if !allocation.choices_for(ability).contains(&choice) {
            if let Some(holder) = choice.as_value().and_then(|v| allocation.holder_of(v)) {
                return Err(DomainError::constraint(format!(
                    "{} is already used by {}",
                    choice, holder
                )));
            }
        }
        self.draft.assign(ability, choice)
    }

    fn describe_screen(&mut self) -> Result<Flow> {
        self.header()?;
        if !self.draft.name().is_empty() {
            writeln!(self.out, "Current name: {}", self.draft.name())?;
        }
        writeln!(self.out, "Enter a name (empty keeps the current one). :back :cancel")?;
        let Some(line) = self.prompt("Name: ")? else {
            return Ok(Flow::Quit);
        };
        if let Some(event) = parse_command(&line) {
            self.navigate(event)?;
            return Ok(Flow::Continue);
        }
        let keep_current = line.is_empty() && !self.draft.name().is_empty();
        if !keep_current {
            if let Err(err) = self.draft.set_name(&line) {
                self.report(&err)?;
                return Ok(Flow::Continue);
            }
        }

        if !self.draft.description().is_empty() {
            writeln!(self.out, "Current description: {}", self.draft.description())?;
        }
        writeln!(
            self.out,
            "Description, several lines allowed. Finish with an empty line; '-' alone clears it."
        )?;
        let mut lines = Vec::new();
        loop {
            let Some(line) = self.read_raw_line()? else {
                return Ok(Flow::Quit);
            };
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }
        match lines.as_slice() {
            [] => {}
            [only] if only.trim() == "-" => self.draft.set_description(""),
            _ => self.draft.set_description(&lines.join("\n")),
        }
        self.navigate(WizardEvent::Next)?;
        Ok(Flow::Continue)
    }

    fn equipment_screen(&mut self) -> Result<Flow> {
        self.header()?;
        let class = match self.draft.require_class() {
            Ok(class) => class.clone(),
            Err(err) => {
                self.report(&err)?;
                self.navigate(WizardEvent::Cancel)?;
                return Ok(Flow::Continue);
            }
        };
        for (i, category) in EquipmentCategory::ALL.into_iter().enumerate() {
            let items = class.items(category);
            let selected = self.draft.equipment().get(category).unwrap_or("-");
            if items.is_empty() {
                writeln!(self.out, "{}) {}: nothing offered", i + 1, category)?;
                continue;
            }
            writeln!(self.out, "{}) {}: {}", i + 1, category, selected)?;
            for (j, item) in items.iter().enumerate() {
                writeln!(self.out, "     {}. {}", j + 1, item)?;
            }
        }
        writeln!(
            self.out,
            "Pick with '<category> <item>', clear with '<category> -'. :finish :back :cancel"
        )?;

        let Some(line) = self.prompt("> ")? else {
            return Ok(Flow::Quit);
        };
        match parse_command(&line) {
            Some(WizardEvent::Finish) => self.finish()?,
            Some(event) => self.navigate(event)?,
            None => {
                let result = parse_equipment(&line, |category| class.items(category))
                    .and_then(|(category, item)| {
                        self.draft.select_equipment(category, item.as_deref())
                    });
                if let Err(err) = result {
                    self.report(&err)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Builds the record and saves it. Any failure keeps the user on the
    /// equipment screen with the draft intact.
    fn finish(&mut self) -> Result<()> {
        let record = match self.draft.finish() {
            Ok(record) => record,
            Err(err) => return self.report(&err),
        };
        if let Err(err) = self.store.save(&record) {
            tracing::warn!(name = %record.name(), error = %err, "Saving character failed");
            return self.notice(format!("Could not save {}: {}", record.name(), err));
        }
        writeln!(self.out, "Saved {}.", record.name())?;
        self.navigate(WizardEvent::Finish)
    }

    fn list_screen(&mut self) -> Result<Flow> {
        self.header()?;
        let mut summaries = match self.store.list_summaries() {
            Ok(summaries) => summaries,
            Err(err) => {
                self.notice(format!("Could not list characters: {}", err))?;
                self.navigate(WizardEvent::CloseList)?;
                return Ok(Flow::Continue);
            }
        };
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        if summaries.is_empty() {
            writeln!(self.out, "No saved characters.")?;
        }
        for (i, summary) in summaries.iter().enumerate() {
            writeln!(
                self.out,
                "{}) {}  (saved {})",
                i + 1,
                summary.name,
                summary.saved_at.format("%Y-%m-%d %H:%M UTC")
            )?;
        }
        writeln!(self.out, "View with '<number>', remove with 'delete <number>'. :back")?;

        let Some(line) = self.prompt("> ")? else {
            return Ok(Flow::Quit);
        };
        if let Some(event) = parse_command(&line) {
            let event = match event {
                WizardEvent::Back | WizardEvent::Cancel => WizardEvent::CloseList,
                other => other,
            };
            self.navigate(event)?;
            return Ok(Flow::Continue);
        }

        let (delete, target) = match line.split_once(char::is_whitespace) {
            Some(("delete" | "d", rest)) => (true, rest.trim()),
            _ => (false, line.as_str()),
        };
        let refs: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        let Some(name) = pick(&refs, target).map(str::to_string) else {
            self.notice(format!("No such character: {}", target))?;
            return Ok(Flow::Continue);
        };

        if delete {
            return self.delete(&name);
        }
        match self.store.load(&name) {
            Ok(text) => {
                writeln!(self.out)?;
                for line in text.lines() {
                    writeln!(self.out, "  {}", line)?;
                }
                if let Err(err) = sheet::parse(&text) {
                    tracing::warn!(name = %name, error = %err, "Stored character is malformed");
                    self.notice(err)?;
                }
            }
            Err(err) => self.notice(format!("Could not load {}: {}", name, err))?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self, name: &str) -> Result<Flow> {
        let Some(answer) = self.prompt(&format!("Delete {}? [y/N] ", name))? else {
            return Ok(Flow::Quit);
        };
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            return Ok(Flow::Continue);
        }
        match self.store.delete(name) {
            Ok(()) => writeln!(self.out, "Deleted {}.", name)?,
            Err(err) => self.notice(format!("Could not delete {}: {}", name, err))?,
        }
        Ok(Flow::Continue)
    }

    /// Checks the forward guards, then moves the state machine.
    fn navigate(&mut self, event: WizardEvent) -> Result<()> {
        if let Err(err) = self.guard(event) {
            return self.report(&err);
        }
        match self.state.apply(event) {
            Ok(next) => {
                if next == WizardState::Idle && self.state.is_creating() {
                    self.draft = CharacterDraft::new();
                }
                self.state = next;
                Ok(())
            }
            Err(err) => self.report(&err),
        }
    }

    fn guard(&self, event: WizardEvent) -> Result<(), DomainError> {
        if event != WizardEvent::Next {
            return Ok(());
        }
        match self.state {
            WizardState::SelectingRace => self.draft.require_race().map(|_| ()),
            WizardState::SelectingClass => self.draft.require_class().map(|_| ()),
            WizardState::AllocatingStats => self.draft.require_complete_allocation(),
            WizardState::Describing => validate_character_name(self.draft.name()).map(|_| ()),
            _ => Ok(()),
        }
    }

    fn header(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "== {} ==", self.state.title())?;
        Ok(())
    }

    fn report(&mut self, err: &DomainError) -> Result<()> {
        tracing::debug!(state = %self.state, error = %err, "Rejected input");
        self.notice(err)
    }

    fn notice(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.out, "! {}", message)?;
        Ok(())
    }

    /// Prints `label` and reads a trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        Ok(self.read_raw_line()?.map(|line| line.trim().to_string()))
    }

    fn read_raw_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

fn marker(selected: bool) -> &'static str {
    if selected {
        "* "
    } else {
        "  "
    }
}

fn parse_command(line: &str) -> Option<WizardEvent> {
    match line.strip_prefix(':')?.trim().to_lowercase().as_str() {
        "next" | "n" => Some(WizardEvent::Next),
        "back" | "b" => Some(WizardEvent::Back),
        "cancel" | "c" => Some(WizardEvent::Cancel),
        "finish" | "f" => Some(WizardEvent::Finish),
        _ => None,
    }
}

/// Resolves a 1-based number or a case-insensitive name against `names`.
fn pick<'n>(names: &[&'n str], input: &str) -> Option<&'n str> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| names.get(i)).copied();
    }
    names
        .iter()
        .find(|name| name.eq_ignore_ascii_case(input))
        .copied()
}

/// Parses `<category> <item>` where either side may be a number, and `-`
/// clears the category. The longest leading run of words naming a category
/// wins, so multi-word labels such as `class item` work.
fn parse_equipment<'c>(
    line: &str,
    items_for: impl Fn(EquipmentCategory) -> &'c [String],
) -> Result<(EquipmentCategory, Option<String>), DomainError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 {
        return Err(DomainError::parse(format!(
            "Expected '<category> <item>', got '{}'",
            line
        )));
    }
    let (category, item) = (1..words.len())
        .rev()
        .find_map(|take| {
            parse_category(&words[..take].join(" "))
                .ok()
                .map(|category| (category, words[take..].join(" ")))
        })
        .ok_or_else(|| {
            DomainError::parse(format!("Unknown equipment category in '{}'", line))
        })?;

    if item == "-" {
        return Ok((category, None));
    }
    let items = items_for(category);
    let names: Vec<&str> = items.iter().map(String::as_str).collect();
    match pick(&names, &item) {
        Some(found) => Ok((category, Some(found.to_string()))),
        None => Err(DomainError::not_found("Item", item)),
    }
}

fn parse_category(input: &str) -> Result<EquipmentCategory, DomainError> {
    match input.parse::<usize>() {
        Ok(n) if (1..=EquipmentCategory::ALL.len()).contains(&n) => {
            Ok(EquipmentCategory::ALL[n - 1])
        }
        _ => EquipmentCategory::from_str(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charforge_store::{CharacterSummary, FileCharacterStore, MockCharacterStore, StoreError};
    use chrono::{TimeZone, Utc};
    use std::io::{self, Cursor};

    fn summaries(names: &[&str]) -> Vec<CharacterSummary> {
        names
            .iter()
            .map(|name| CharacterSummary {
                name: name.to_string(),
                saved_at: Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap(),
            })
            .collect()
    }

    const DWARF_FIGHTER: &str = "\
1
Dwarf
Fighter
str 15
dex 14
con 13
int 12
wis 10
cha 8
:next
Thorin
Heir of Durin
King under the Mountain

1 1
2 Chain mail
";

    fn run_script<S: CharacterStore>(store: &S, script: &str) -> (String, WizardState) {
        let catalog = Catalog::builtin();
        let mut output = Vec::new();
        let mut shell = Shell::new(&catalog, store, Cursor::new(script.as_bytes()), &mut output);
        shell.run().expect("shell run");
        let state = shell.state();
        (String::from_utf8(output).expect("utf8"), state)
    }

    #[test]
    fn test_full_creation_saves_character() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = FileCharacterStore::new(temp_dir.path().join("characters"));
        let script = format!("{}:finish\n3\n", DWARF_FIGHTER);

        let (output, state) = run_script(&store, &script);

        assert!(output.contains("Saved Thorin."), "{}", output);
        assert_eq!(state, WizardState::Idle);
        let sheet = sheet::parse(&store.load("Thorin").unwrap()).unwrap();
        assert_eq!(sheet.race, "Dwarf");
        assert_eq!(sheet.class, "Fighter");
        assert_eq!(sheet.description, "Heir of Durin\nKing under the Mountain");
        assert_eq!(sheet.scores.get(Ability::Strength).value, 15);
        assert_eq!(sheet.scores.get(Ability::Constitution).value, 15);
        assert_eq!(sheet.scores.get(Ability::Constitution).modifier, 2);
        assert_eq!(sheet.scores.get(Ability::Charisma).modifier, -1);
        assert_eq!(
            sheet.equipment.get(EquipmentCategory::Weapon),
            Some("Greatsword")
        );
        assert_eq!(sheet.equipment.get(EquipmentCategory::Gear), Some("Chain mail"));
        assert_eq!(sheet.equipment.get(EquipmentCategory::Tools), None);
    }

    #[test]
    fn test_used_value_is_refused() {
        let mut store = MockCharacterStore::new();
        store.expect_save().never();
        let script = "1\nElf\nWizard\nstr 15\ndex 15\n:next\n:cancel\n3\n";

        let (output, _) = run_script(&store, script);

        assert!(output.contains("15 is already used by Strength"), "{}", output);
        assert!(output.contains("Stat allocation is incomplete"), "{}", output);
        // Dexterity row never offers 15 once Strength holds it.
        let last_dex_row = output
            .lines()
            .rev()
            .find(|l| l.starts_with("DEX"))
            .unwrap();
        assert!(!last_dex_row.contains(" 15"), "{}", last_dex_row);
    }

    #[test]
    fn test_clearing_a_value_frees_it() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = FileCharacterStore::new(temp_dir.path());
        let script = "1\nHuman\nBard\nstr 15\nstr -\ndex 15\n:cancel\n3\n";

        let (output, _) = run_script(&store, script);

        assert!(!output.contains("already used"), "{}", output);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_next_requires_choice() {
        let mut store = MockCharacterStore::new();
        store.expect_save().never();
        let (output, _) = run_script(&store, "1\n:next\n:cancel\n3\n");
        assert!(output.contains("No race chosen"), "{}", output);
    }

    #[test]
    fn test_back_keeps_previous_choice() {
        let mut store = MockCharacterStore::new();
        store.expect_save().never();
        let (output, _) = run_script(&store, "1\nGnome\n:back\n:next\n:cancel\n3\n");
        assert_eq!(output.matches("== Choose a class ==").count(), 2);
        assert!(output.contains("* 7) Gnome"), "{}", output);
    }

    #[test]
    fn test_back_on_first_step_is_rejected() {
        let mut store = MockCharacterStore::new();
        store.expect_save().never();
        let (output, _) = run_script(&store, "1\n:back\n:cancel\n3\n");
        assert!(output.contains("Invalid state transition"), "{}", output);
    }

    #[test]
    fn test_invalid_names_keep_user_on_step() {
        let mut store = MockCharacterStore::new();
        store.expect_save().never();
        let script = "1\nHuman\nBard\n1 15\n2 14\n3 13\n4 12\n5 10\n6 8\n:next\n\nBad/Name\n:cancel\n3\n";

        let (output, _) = run_script(&store, script);

        assert_eq!(output.matches("== Name and description ==").count(), 3);
        assert_eq!(output.matches("! Validation failed").count(), 2, "{}", output);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut store = MockCharacterStore::new();
        store.expect_save().never();
        let script = format!("{}:cancel\n3\n", DWARF_FIGHTER);

        let (output, state) = run_script(&store, &script);

        assert!(!output.contains("Saved"));
        assert_eq!(state, WizardState::Idle);
    }

    #[test]
    fn test_save_failure_keeps_draft() {
        let mut store = MockCharacterStore::new();
        store.expect_save().times(1).returning(|_| {
            Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        });
        let script = format!("{}:finish\n", DWARF_FIGHTER);

        let (output, state) = run_script(&store, &script);

        assert!(output.contains("Could not save Thorin"), "{}", output);
        assert_eq!(state, WizardState::SelectingEquipment);
    }

    #[test]
    fn test_unknown_item_is_reported() {
        let mut store = MockCharacterStore::new();
        store.expect_save().never();
        let script = format!("{}1 Lute\n4 1\n:cancel\n3\n", DWARF_FIGHTER);

        let (output, _) = run_script(&store, &script);

        assert!(output.contains("Item not found: Lute"), "{}", output);
        assert!(output.contains("4) Class Item: nothing offered"), "{}", output);
        assert!(output.contains("Item not found: 1"), "{}", output);
    }

    const HUMAN_BARD: &str = "\
1
Human
Bard
1 15
2 14
3 13
4 12
5 10
6 8
:next
Lia
A wandering minstrel

";

    #[test]
    fn test_multi_word_category_label() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = FileCharacterStore::new(temp_dir.path());
        let script = format!("{}class item Lute\ngear robe\n:finish\n3\n", HUMAN_BARD);

        let (output, _) = run_script(&store, &script);

        assert!(!output.contains("Unknown equipment category"), "{}", output);
        let sheet = sheet::parse(&store.load("Lia").unwrap()).unwrap();
        assert_eq!(sheet.equipment.get(EquipmentCategory::ClassItem), Some("Lute"));
        assert_eq!(sheet.equipment.get(EquipmentCategory::Gear), Some("Robe"));
    }

    #[test]
    fn test_description_can_be_cleared() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = FileCharacterStore::new(temp_dir.path());
        let script = format!("{}:back\n\n-\n\n:finish\n3\n", HUMAN_BARD);

        let (output, _) = run_script(&store, &script);

        assert!(output.contains("Current description: A wandering minstrel"), "{}", output);
        let sheet = sheet::parse(&store.load("Lia").unwrap()).unwrap();
        assert_eq!(sheet.name, "Lia");
        assert_eq!(sheet.description, "");
    }

    #[test]
    fn test_malformed_file_is_flagged_on_view() {
        let mut store = MockCharacterStore::new();
        store
            .expect_list_summaries()
            .returning(|| Ok(summaries(&["Broken"])));
        store
            .expect_load()
            .withf(|name| name == "Broken")
            .returning(|_| Ok("Name: Broken\n".to_string()));

        let (output, _) = run_script(&store, "2\n1\n:back\n3\n");

        assert!(output.contains("  Name: Broken"), "{}", output);
        assert!(output.contains("! Malformed character file"), "{}", output);
    }

    #[test]
    fn test_list_view_and_delete() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = FileCharacterStore::new(temp_dir.path());
        run_script(&store, &format!("{}:finish\n3\n", DWARF_FIGHTER));

        let (output, _) = run_script(&store, "2\n1\ndelete 1\ny\n:back\n3\n");

        assert!(output.contains("1) Thorin  (saved "), "{}", output);
        assert!(output.contains("  Name: Thorin"), "{}", output);
        assert!(!output.contains("Malformed"), "{}", output);
        assert!(output.contains("  Strength: 15 (2)"), "{}", output);
        assert!(output.contains("Deleted Thorin."), "{}", output);
        assert!(output.contains("No saved characters."), "{}", output);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut store = MockCharacterStore::new();
        store
            .expect_list_summaries()
            .returning(|| Ok(summaries(&["Lia"])));
        store.expect_delete().never();

        let (output, _) = run_script(&store, "2\nd 1\nn\n:back\n3\n");

        assert!(output.contains("1) Lia  (saved 2026-10-19 08:30 UTC)"), "{}", output);
        assert!(!output.contains("Deleted"));
    }

    #[test]
    fn test_delete_of_vanished_character_is_reported() {
        let mut store = MockCharacterStore::new();
        store
            .expect_list_summaries()
            .returning(|| Ok(summaries(&["Ghost"])));
        store
            .expect_delete()
            .withf(|name| name == "Ghost")
            .returning(|name| Err(StoreError::not_found(name)));

        let (output, _) = run_script(&store, "2\ndelete Ghost\nyes\n:back\n3\n");

        assert!(output.contains("Character not found: Ghost"), "{}", output);
    }

    #[test]
    fn test_list_failure_returns_to_menu() {
        let mut store = MockCharacterStore::new();
        store.expect_list_summaries().times(1).returning(|| {
            Err(StoreError::Io(io::Error::other("disk gone")))
        });

        let (output, state) = run_script(&store, "2\n3\n");

        assert!(output.contains("Could not list characters"), "{}", output);
        assert_eq!(state, WizardState::Idle);
    }

    #[test]
    fn test_end_of_input_quits_mid_wizard() {
        let mut store = MockCharacterStore::new();
        store.expect_save().never();
        let (_, state) = run_script(&store, "1\nElf\n");
        assert_eq!(state, WizardState::SelectingClass);
    }

    #[test]
    fn test_pick_by_number_or_name() {
        let names = ["Elf", "Drow"];
        assert_eq!(pick(&names, "2"), Some("Drow"));
        assert_eq!(pick(&names, "elf"), Some("Elf"));
        assert_eq!(pick(&names, "0"), None);
        assert_eq!(pick(&names, "3"), None);
        assert_eq!(pick(&names, "Orc"), None);
    }

    #[test]
    fn test_parse_equipment_prefers_longest_category() {
        let lutes = vec!["Lute".to_string(), "Flute".to_string()];
        let items = |category| match category {
            EquipmentCategory::ClassItem => lutes.as_slice(),
            _ => &[][..],
        };
        assert_eq!(
            parse_equipment("class item Lute", items),
            Ok((EquipmentCategory::ClassItem, Some("Lute".to_string())))
        );
        assert_eq!(
            parse_equipment("4 2", items),
            Ok((EquipmentCategory::ClassItem, Some("Flute".to_string())))
        );
        assert_eq!(
            parse_equipment("class_item -", items),
            Ok((EquipmentCategory::ClassItem, None))
        );
        assert!(matches!(
            parse_equipment("class Lute", items),
            Err(DomainError::Parse(_))
        ));
        assert!(parse_equipment("weapon", items).is_err());
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(":next"), Some(WizardEvent::Next));
        assert_eq!(parse_command(": Back"), Some(WizardEvent::Back));
        assert_eq!(parse_command("next"), None);
        assert_eq!(parse_command(":jump"), None);
    }
}
