use crate::config::ConfigRecord;
use crate::constants::TOTAL_STEPS;
use crate::error::Result;
use crate::validation::validate_identity;

/// Headings of the wizard steps, the last being the preview.
pub const STEP_TITLES: [&str; TOTAL_STEPS as usize] = [
    "Business Info",
    "Data Collection",
    "Third-Party Services",
    "Features & Audience",
    "Policy Terms",
    "Preview",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

/// Position in the multi-step form, always within `1..=TOTAL_STEPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    step: u8,
}

impl Default for Wizard {
    fn default() -> Self {
        Self { step: 1 }
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn title(&self) -> &'static str {
        STEP_TITLES[usize::from(self.step - 1)]
    }

    pub fn is_preview(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    /// Moves forward one step, staying put on the preview.
    ///
    /// Leaving the first step requires the identity fields; on failure the
    /// wizard does not move.
    pub fn next(&mut self, config: &ConfigRecord) -> Result<u8> {
        if self.step == 1 {
            validate_identity(config)?;
        }
        if self.step < TOTAL_STEPS {
            self.step += 1;
        }
        Ok(self.step)
    }

    pub fn prev(&mut self) -> u8 {
        if self.step > 1 {
            self.step -= 1;
        }
        self.step
    }

    /// Status of every step, first to last.
    pub fn progress(&self) -> Vec<StepStatus> {
        (1..=TOTAL_STEPS)
            .map(|step| match step.cmp(&self.step) {
                std::cmp::Ordering::Less => StepStatus::Done,
                std::cmp::Ordering::Equal => StepStatus::Active,
                std::cmp::Ordering::Greater => StepStatus::Pending,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identified() -> ConfigRecord {
        ConfigRecord {
            business_name: "Acme".into(),
            website_url: "https://acme.test".into(),
            email: "a@acme.test".into(),
            ..Default::default()
        }
    }

    #[test]
    fn first_step_blocks_without_identity() {
        let mut wizard = Wizard::new();
        assert!(wizard.next(&ConfigRecord::default()).is_err());
        assert_eq!(wizard.step(), 1);
        assert_eq!(wizard.next(&identified()).unwrap(), 2);
    }

    #[test]
    fn later_steps_do_not_validate() {
        let mut wizard = Wizard::new();
        wizard.next(&identified()).unwrap();
        for expected in 3..=TOTAL_STEPS {
            assert_eq!(wizard.next(&ConfigRecord::default()).unwrap(), expected);
        }
        assert!(wizard.is_preview());
        assert_eq!(wizard.title(), "Preview");
        assert_eq!(wizard.next(&ConfigRecord::default()).unwrap(), TOTAL_STEPS);
    }

    #[test]
    fn prev_stops_at_first_step() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.prev(), 1);
        wizard.next(&identified()).unwrap();
        assert_eq!(wizard.prev(), 1);
    }

    #[test]
    fn progress_marks_done_active_pending() {
        let mut wizard = Wizard::new();
        wizard.next(&identified()).unwrap();
        wizard.next(&identified()).unwrap();
        let progress = wizard.progress();
        assert_eq!(progress.len(), TOTAL_STEPS as usize);
        assert_eq!(&progress[..4], &[StepStatus::Done, StepStatus::Done, StepStatus::Active, StepStatus::Pending]);
    }
}
