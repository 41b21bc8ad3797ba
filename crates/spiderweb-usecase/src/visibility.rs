//! Menu visibility - Which modules an admin has switched off

use std::collections::HashSet;

use spiderweb_domain::ModuleId;

/// Modules that can never be hidden
pub const LOCKED_MODULES: [ModuleId; 2] = [ModuleId::Dashboard, ModuleId::Settings];

/// Visibility of the dashboard menus. Everything starts visible.
#[derive(Debug, Clone, Default)]
pub struct MenuVisibility {
    hidden: HashSet<ModuleId>,
}

impl MenuVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(module: ModuleId) -> bool {
        LOCKED_MODULES.contains(&module)
    }

    pub fn is_visible(&self, module: ModuleId) -> bool {
        !self.hidden.contains(&module)
    }

    /// Flip a module's visibility and return the new value.
    /// Locked modules stay visible.
    pub fn toggle(&mut self, module: ModuleId) -> bool {
        if Self::is_locked(module) {
            return true;
        }
        if !self.hidden.remove(&module) {
            self.hidden.insert(module);
        }
        self.is_visible(module)
    }

    /// Visible modules in menu order
    pub fn visible_modules(&self) -> Vec<ModuleId> {
        ModuleId::all()
            .iter()
            .copied()
            .filter(|m| self.is_visible(*m))
            .collect()
    }
}
