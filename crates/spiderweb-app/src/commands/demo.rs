//! spiderweb demo command

use clap::Args;

use spiderweb_adapter::controller::analyze_ecosystem;
use spiderweb_adapter::gateway::OfflineTextGenerator;
use spiderweb_domain::{
    Clock, IdGenerator, Interaction, InteractionId, InteractionType, Lead, LeadId, Outcome,
};
use spiderweb_usecase::ActionOrigin;

use crate::context::AppContext;

#[derive(Debug, Args)]
pub struct DemoCommand {
    /// Run the ecosystem analysis on the final state
    #[arg(long)]
    pub analyze: bool,
}

impl DemoCommand {
    pub async fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let ws = &ctx.workspace;
        let ids = ws.engine().ids();
        let clock = ws.engine().clock();
        let operator = ws.snapshot()?.user().id().clone();

        println!("Spider Web demo");

        // A lead with a phone number earns the finder bonus
        let lead = Lead::new(LeadId::new(ids.next_id("lead")), "Acme Co")
            .with_company("Acme Co")
            .with_phone("555-1234")
            .created_at(clock.now());
        let reaction = ws.register_new_lead(lead)?;
        ctx.report("register Acme Co", &reaction);
        let Some(acme) = reaction.admitted_lead else {
            anyhow::bail!("Lead was not admitted");
        };

        let call = Interaction::new(
            InteractionId::new(ids.next_id("int")),
            acme.id().clone(),
            operator.clone(),
            InteractionType::Call,
            Outcome::Success,
        )
        .with_notes("Closed on the first call")
        .at(clock.now());
        ctx.report("call Acme Co", &ws.record_interaction(call)?);

        let email = Interaction::new(
            InteractionId::new(ids.next_id("int")),
            acme.id().clone(),
            operator,
            InteractionType::Email,
            Outcome::Failure,
        )
        .at(clock.now());
        let reaction = ws.record_interaction(email)?;
        ctx.report("email Acme Co", &reaction);

        if let Some(training) = reaction.training_assigned {
            ctx.report("complete training", &ws.complete_training(&training)?);
        }

        let run = ws.run_ai_action("d1", ActionOrigin::Manual)?;
        ctx.report(&run.label, &run.reaction);

        ctx.finish()?;

        if self.analyze {
            let analysis = analyze_ecosystem(&OfflineTextGenerator, &*ws.snapshot()?).await;
            println!();
            println!("Ecosystem analysis:");
            println!("  {}", analysis);
        }
        Ok(())
    }
}
