//! spiderweb catalog command

use clap::Args;
use tracing::warn;

use spiderweb_adapter::controller::catalog_to_json;
use spiderweb_domain::ModuleId;
use spiderweb_usecase::MenuVisibility;

use crate::context::AppContext;

#[derive(Debug, Args)]
pub struct CatalogCommand {
    /// Hide a module's menu (repeatable); dashboard and settings stay visible
    #[arg(long = "hide", value_name = "MODULE")]
    pub hidden: Vec<ModuleId>,
}

impl CatalogCommand {
    pub fn menus(&self) -> MenuVisibility {
        let mut menus = MenuVisibility::new();
        for module in &self.hidden {
            if MenuVisibility::is_locked(*module) {
                warn!(module = %module, "Module is locked visible");
                continue;
            }
            if menus.is_visible(*module) {
                menus.toggle(*module);
            }
        }
        menus
    }

    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let catalog = ctx.workspace.catalog();

        if ctx.json {
            println!("{}", catalog_to_json(catalog)?);
            return Ok(());
        }

        let menus = self.menus();
        for module in menus.visible_modules() {
            let actions = catalog.actions_for(module);
            if actions.is_empty() {
                println!("{}", module.display_name());
                continue;
            }
            println!("{} ({})", module.display_name(), actions.len());
            for action in actions {
                println!("  {:<4} {:<30} {}", action.id, action.label, action.description);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_modules() {
        let cmd = CatalogCommand {
            hidden: vec![ModuleId::Affiliates, ModuleId::Settings, ModuleId::Affiliates],
        };

        let menus = cmd.menus();
        assert!(!menus.is_visible(ModuleId::Affiliates));
        assert!(menus.is_visible(ModuleId::Settings));
        assert_eq!(menus.visible_modules().len(), ModuleId::all().len() - 1);
    }
}
