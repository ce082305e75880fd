#[cfg(test)]
#[path = "sequencer_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::Step;
use crate::domain::models::StepControls;
use crate::domain::models::StepView;

/// Pure render of one step at a given position. The view is a plain value;
/// committing it to the screen is the caller's job.
pub fn render(step: &Step, position: usize, total: usize) -> StepView {
    return StepView {
        badge: format!("Paso {position}"),
        title: step.title.clone(),
        description: step.description.clone(),
        tables: step.tables.clone(),
        controls: StepControls {
            retreat_enabled: position > 0,
            advance_enabled: position + 1 < total,
        },
    };
}

/// Owns the fixed step sequence and the single integer of navigation state.
/// The position always indexes a valid step; the transition guards below are
/// the authoritative contract, disabled controls in the UI are cosmetic.
pub struct Sequencer {
    steps: Vec<Step>,
    position: usize,
}

impl Sequencer {
    pub fn new(steps: Vec<Step>) -> Result<Sequencer> {
        if steps.is_empty() {
            bail!("a walkthrough needs at least one step");
        }

        return Ok(Sequencer { steps, position: 0 });
    }

    pub fn position(&self) -> usize {
        return self.position;
    }

    pub fn len(&self) -> usize {
        return self.steps.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.steps.is_empty();
    }

    /// Move forward one step. Returns false when already at the last step.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 >= self.steps.len() {
            return false;
        }

        self.position += 1;
        return true;
    }

    /// Move back one step. Returns false when already at the first step.
    pub fn retreat(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }

        self.position -= 1;
        return true;
    }

    pub fn view(&self) -> StepView {
        return render(&self.steps[self.position], self.position, self.steps.len());
    }
}
