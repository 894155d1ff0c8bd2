//! Engine module: controlador de flujo, builder y contexto de step.

pub mod builder;
pub mod core;
pub mod flow_ctx;

pub use builder::FlowBuilder;
pub use core::{AdvanceOutcome, CompletionHook, FlowController, StepTicket, StepView};
pub use flow_ctx::StepCtx;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::errors::FlowError;
    use crate::event::FlowEventKind;
    use crate::state::FlowState;
    use crate::step::{Decision, StepId, StepStatus};

    fn onboarding(log: Rc<RefCell<Vec<FlowState>>>) -> FlowController {
        FlowController::builder().steps([StepId::LanguageSelection,
                                         StepId::DemoLearn,
                                         StepId::DemoFillGap,
                                         StepId::Completion])
                                  .known_languages(["vsl", "asl"])
                                  .on_complete(move |st| log.borrow_mut().push(st.clone()))
                                  .build()
                                  .expect("valid flow")
    }

    fn answer(sel: &str, correct: bool) -> Option<Decision> {
        Some(Decision::Answer { selected: sel.into(), correct })
    }

    #[test]
    fn builder_rejects_malformed_flows() {
        assert!(matches!(FlowController::builder().build(), Err(FlowError::InvalidDefinition(_))));
        assert!(matches!(FlowController::builder().step(StepId::DemoLearn).build(),
                         Err(FlowError::InvalidDefinition(_))));
        assert!(matches!(FlowController::builder().steps([StepId::Completion, StepId::Completion]).build(),
                         Err(FlowError::InvalidDefinition(_))));
        assert!(matches!(FlowController::builder().steps([StepId::FillGap, StepId::FillGap, StepId::Completion])
                                                  .build(),
                         Err(FlowError::InvalidDefinition(_))));
    }

    #[test]
    fn advance_requires_decision_on_selection() {
        let mut flow = onboarding(Rc::default());
        assert_eq!(flow.advance(None),
                   Err(FlowError::MissingDecision { step: StepId::LanguageSelection }));
        assert_eq!(flow.advance(Some(Decision::Language("  ".into()))),
                   Err(FlowError::MissingDecision { step: StepId::LanguageSelection }));
        assert_eq!(flow.advance(Some(Decision::Language("xyz".into()))),
                   Err(FlowError::UnknownLanguage("xyz".into())));
        assert!(matches!(flow.advance(answer("BẠN", true)), Err(FlowError::UnexpectedDecision { .. })));
        assert_eq!(flow.state().cursor, 0);
        assert!(flow.state().decisions.is_empty());
    }

    #[test]
    fn retreat_at_first_step_is_noop() {
        let mut flow = onboarding(Rc::default());
        let before = flow.state().clone();
        let events_before = flow.events().len();
        assert!(!flow.retreat());
        assert_eq!(flow.state(), &before);
        assert_eq!(flow.events().len(), events_before);
        assert!(!flow.current_step().can_retreat);
    }

    #[test]
    fn retreat_keeps_later_decisions_and_allows_overwrite() {
        let mut flow = onboarding(Rc::default());
        flow.advance(Some(Decision::Language("asl".into()))).unwrap();
        flow.advance(None).unwrap();
        flow.advance(answer("TÔI", false)).unwrap();

        assert!(flow.retreat());
        assert!(flow.retreat());
        assert!(flow.retreat());
        assert_eq!(flow.current_step().step.id, StepId::LanguageSelection);
        assert_eq!(flow.current_step().previous, Some(&Decision::Language("asl".into())));
        assert_eq!(flow.state().answer_for(StepId::DemoFillGap), Some("TÔI"));

        flow.advance(Some(Decision::Language("vsl".into()))).unwrap();
        assert_eq!(flow.state().language(), Some("vsl"));
        assert_eq!(flow.state().answer_for(StepId::DemoFillGap), Some("TÔI"));
    }

    #[test]
    fn terminal_signals_completion_once_per_reach() {
        let log: Rc<RefCell<Vec<FlowState>>> = Rc::default();
        let mut flow = onboarding(log.clone());
        flow.advance(Some(Decision::Language("vsl".into()))).unwrap();
        flow.advance(Some(Decision::Continue)).unwrap();
        assert_eq!(flow.advance(answer("BẠN", true)).unwrap(),
                   AdvanceOutcome::Moved { from: StepId::DemoFillGap,
                                           to: StepId::Completion });

        assert_eq!(flow.advance(None), Ok(AdvanceOutcome::Completed));
        assert_eq!(flow.advance(None), Err(FlowError::FlowCompleted));
        assert_eq!(flow.state().cursor, 3);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].language(), Some("vsl"));

        // volver y llegar otra vez cuenta como una nueva llegada
        assert!(flow.retreat());
        assert!(!flow.is_completed());
        flow.advance(answer("BẠN", true)).unwrap();
        assert_eq!(flow.advance(None), Ok(AdvanceOutcome::Completed));
        assert_eq!(log.borrow().len(), 2);

        let completions = flow.events()
                              .iter()
                              .filter(|e| matches!(e.kind, FlowEventKind::FlowCompleted { .. }))
                              .count();
        assert_eq!(completions, 2);
    }

    #[test]
    fn tickets_expire_on_any_transition() {
        let mut flow = onboarding(Rc::default());
        let t0 = flow.current_step().ticket;
        assert!(flow.is_current(&t0));
        flow.advance(Some(Decision::Language("vsl".into()))).unwrap();
        assert!(!flow.is_current(&t0));
        let t1 = flow.current_step().ticket;
        flow.retreat();
        assert!(!flow.is_current(&t1));

        let other = onboarding(Rc::default());
        assert!(!other.is_current(&flow.current_step().ticket));
    }

    #[test]
    fn progress_and_statuses_follow_cursor() {
        let mut flow = onboarding(Rc::default());
        assert_eq!(flow.progress_percent(), 0);
        flow.advance(Some(Decision::Language("vsl".into()))).unwrap();
        assert_eq!(flow.progress_percent(), 33);
        assert_eq!(flow.statuses()[0], (StepId::LanguageSelection, StepStatus::Visited));
        assert_eq!(flow.statuses()[1], (StepId::DemoLearn, StepStatus::Current));
        assert_eq!(flow.statuses()[3], (StepId::Completion, StepStatus::Pending));
    }

    #[test]
    fn step_ctx_drives_until_completion() {
        let mut flow = onboarding(Rc::default());
        let mut ctx = StepCtx::new(&mut flow);
        assert_eq!(ctx.data().step.id, StepId::LanguageSelection);
        let done = ctx.drive([Some(Decision::Language("vsl".into())), None]).unwrap();
        assert!(!done);
        assert_eq!(ctx.data().step.id, StepId::DemoFillGap);
        let done = ctx.drive([answer("BẠN", true), None]).unwrap();
        assert!(done);
        assert!(ctx.on_retreat());
    }
}
