//! Interactive session: walk each axis, then act on the generated outputs.

use std::fmt;

use designprompt_core::{AxisOptions, Configurator, FieldChange, OptionCatalog, OutputKind};
use dialoguer::{Input, Select};

use crate::clipboard::{copy_with_fallback, ClipboardSink, SelectionSink};
use crate::error::Result;

/// Item appended to free-text axes to type a custom value.
const CUSTOM_VALUE: &str = "Other...";

/// Actions offered once every axis has been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowPrompt,
    ShowCode,
    CopyPrompt,
    CopyCode,
    Edit,
    Reset,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::ShowPrompt,
        MenuAction::ShowCode,
        MenuAction::CopyPrompt,
        MenuAction::CopyCode,
        MenuAction::Edit,
        MenuAction::Reset,
        MenuAction::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ShowPrompt => "Show prompt",
            MenuAction::ShowCode => "Show code",
            MenuAction::CopyPrompt => "Copy prompt",
            MenuAction::CopyCode => "Copy code",
            MenuAction::Edit => "Edit options",
            MenuAction::Reset => "Reset to defaults",
            MenuAction::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Select items for an axis and the index to preselect.
///
/// Free-text axes get a trailing custom entry, preselected when the current
/// value is not listed. A closed axis holding an unlisted label offers that
/// label as an extra item so keeping it is the default.
pub fn axis_items(axis: &AxisOptions, current: &str) -> (Vec<String>, usize) {
    let mut items: Vec<String> = axis.values.iter().map(|value| value.to_string()).collect();
    let listed = axis.values.iter().position(|value| *value == current);
    if axis.free_text {
        items.push(CUSTOM_VALUE.to_string());
    } else if listed.is_none() {
        items.push(current.to_string());
    }
    let selected = listed.unwrap_or(items.len() - 1);
    (items, selected)
}

/// Runs the session until the user quits.
pub async fn run<P, F>(
    configurator: &mut Configurator,
    primary: &P,
    fallback: &mut F,
) -> Result<()>
where
    P: ClipboardSink + ?Sized,
    F: SelectionSink + ?Sized,
{
    edit(configurator)?;

    loop {
        let actions = MenuAction::ALL;
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            MenuAction::ShowPrompt => println!("{}\n", configurator.output(OutputKind::Prompt)),
            MenuAction::ShowCode => println!("{}\n", configurator.output(OutputKind::Code)),
            MenuAction::CopyPrompt => {
                copy(configurator, OutputKind::Prompt, primary, fallback).await;
            }
            MenuAction::CopyCode => copy(configurator, OutputKind::Code, primary, fallback).await,
            MenuAction::Edit => edit(configurator)?,
            MenuAction::Reset => eprintln!("{}", configurator.reset()),
            MenuAction::Quit => return Ok(()),
        }
    }
}

async fn copy<P, F>(
    configurator: &Configurator,
    kind: OutputKind,
    primary: &P,
    fallback: &mut F,
)
where
    P: ClipboardSink + ?Sized,
    F: SelectionSink + ?Sized,
{
    let notice = copy_with_fallback(configurator.output(kind), kind, primary, fallback).await;
    eprintln!("{notice}");
}

/// Visits every axis in form order, asking for the primary color after the theme.
fn edit(configurator: &mut Configurator) -> Result<()> {
    for axis in OptionCatalog::axes() {
        let current = configurator
            .config()
            .value_of(axis.key)
            .unwrap_or_else(|| axis.default.clone());
        let value = ask_axis(&axis, &current)?;

        if let Some(change) = FieldChange::from_key(axis.key, &value) {
            apply(configurator, change);
        }

        if axis.key == "theme" {
            let color: String = Input::new()
                .with_prompt("Primary color")
                .with_initial_text(configurator.color_text())
                .interact_text()?;
            if !apply(configurator, FieldChange::ColorText(color)) {
                eprintln!(
                    "Invalid color format, keeping {}",
                    configurator.config().primary_color
                );
            }
        }
    }
    Ok(())
}

fn ask_axis(axis: &AxisOptions, current: &str) -> Result<String> {
    let (items, selected) = axis_items(axis, current);
    let choice = Select::new()
        .with_prompt(axis.title)
        .items(&items)
        .default(selected)
        .interact()?;

    if items[choice] == CUSTOM_VALUE {
        let value: String = Input::new()
            .with_prompt(axis.title)
            .with_initial_text(current)
            .interact_text()?;
        return Ok(value);
    }
    Ok(items[choice].clone())
}

fn apply(configurator: &mut Configurator, change: FieldChange) -> bool {
    let applied = configurator.apply(change);
    if applied {
        tracing::debug!(
            prompt_len = configurator.output(OutputKind::Prompt).len(),
            document_len = configurator.output(OutputKind::Code).len(),
            "regenerated outputs"
        );
    } else {
        tracing::debug!(color = configurator.color_text(), "rejected color text");
    }
    applied
}
