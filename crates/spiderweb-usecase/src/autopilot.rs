//! Autopilot planning - Which AI action the background worker runs next
//!
//! The planner only chooses. Randomness comes from the caller as a
//! `pick(n)` function returning an index below `n`, so the adapter owns
//! the RNG and tests can script the choice.

use crate::catalog::{AiAction, AiCatalog};

/// Label prefix for actions the autopilot ran
pub const AUTOPILOT_PREFIX: &str = "[AUTO-PILOT] ";

/// Picks a module, then an action inside it
pub struct AutopilotPlanner<'a> {
    catalog: &'a AiCatalog,
}

impl<'a> AutopilotPlanner<'a> {
    pub fn new(catalog: &'a AiCatalog) -> Self {
        Self { catalog }
    }

    /// Choose the next action. Out-of-range picks wrap around.
    ///
    /// Returns None only for an empty catalog.
    pub fn plan(&self, mut pick: impl FnMut(usize) -> usize) -> Option<&'a AiAction> {
        let modules = self.catalog.modules();
        if modules.is_empty() {
            return None;
        }
        let module = modules[pick(modules.len()) % modules.len()];

        let actions = self.catalog.actions_for(module);
        let action = actions[pick(actions.len()) % actions.len()];
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spiderweb_domain::ModuleId;

    #[test]
    fn test_scripted_pick() {
        let catalog = AiCatalog::standard();
        let planner = AutopilotPlanner::new(&catalog);

        // second module (lead finder), third action
        let mut script = vec![1, 2].into_iter();
        let action = planner.plan(|_| script.next().unwrap()).unwrap();

        assert_eq!(action.module, ModuleId::LeadFinder);
        assert_eq!(action.id, "l3");
    }

    #[test]
    fn test_out_of_range_pick_wraps() {
        let catalog = AiCatalog::standard();
        let planner = AutopilotPlanner::new(&catalog);

        let action = planner.plan(|n| n).unwrap();
        assert_eq!(action.id, "d1");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = AiCatalog::new(Vec::new());
        assert!(AutopilotPlanner::new(&catalog).plan(|_| 0).is_none());
    }
}
