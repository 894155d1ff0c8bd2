use std::cell::{Cell, RefCell};
use std::fs;
use std::rc::Rc;

use signflow::assets::{AssetResolver, FsMediaSource, SlotState};
use signflow::core::{flows, AdvanceOutcome, CheckPolicy, Decision, FlowState, Outcome, StepId};
use signflow::{CoreError, LearningSession};

fn static_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let videos = dir.path().join("resources/videos");
    fs::create_dir_all(&videos).unwrap();
    fs::write(videos.join("Chào.mp4"), b"0123456789").unwrap();
    dir
}

fn session(root: &tempfile::TempDir, policy: CheckPolicy) -> (LearningSession<FsMediaSource>, Rc<Cell<u32>>) {
    let completions = Rc::new(Cell::new(0));
    let counter = completions.clone();
    let flow = flows::onboarding().on_complete(move |_| counter.set(counter.get() + 1))
                                  .build()
                                  .unwrap();
    let resolver = AssetResolver::new("/resources/videos/", FsMediaSource::new(root.path()));
    (LearningSession::new(flow, resolver, policy), completions)
}

#[tokio::test]
async fn onboarding_session_end_to_end() {
    let root = static_root();
    let (mut s, completions) = session(&root, CheckPolicy::RetryOnIncorrect);

    assert!(s.begin_media().is_none(), "language selection has no video");
    s.advance(Some(Decision::Language("vsl".into()))).unwrap();

    assert!(s.load_media().await);
    assert!(matches!(s.slot().state(), SlotState::Ready(m) if m.content_length == Some(10)));
    s.advance(None).unwrap();

    // el video de "you" no existe: placeholder, pero el flujo sigue
    assert!(s.load_media().await);
    assert!(matches!(s.slot().state(), SlotState::Placeholder { .. }));
    assert!(matches!(s.advance(None), Err(CoreError::Domain(_))));

    s.select("TÔI").unwrap();
    s.select("BẠN").unwrap();
    assert_eq!(s.check().unwrap(), Outcome::Correct);
    assert_eq!(s.proceed().unwrap(),
               Some(AdvanceOutcome::Moved { from: StepId::DemoFillGap,
                                            to: StepId::Completion }));

    assert_eq!(s.view().step.id, StepId::Completion);
    assert_eq!(s.flow().state().language(), Some("vsl"));
    assert!(s.lesson().is_none());
    assert_eq!(s.advance(None).unwrap(), AdvanceOutcome::Completed);
    assert!(s.advance(None).is_err());
    assert_eq!(completions.get(), 1);
}

#[tokio::test]
async fn late_media_result_is_discarded_after_navigation() {
    let root = static_root();
    let (mut s, _) = session(&root, CheckPolicy::RetryOnIncorrect);
    s.advance(Some(Decision::Language("vsl".into()))).unwrap();

    let req = s.begin_media().expect("demo lesson shows a video");
    let pending = s.resolver().preload(req.url).await;
    // el usuario vuelve atrás antes de aplicar el resultado
    assert!(s.retreat());
    assert!(!s.apply_media(req, pending));
    assert_eq!(s.slot().state(), &SlotState::Empty);
}

#[tokio::test]
async fn demo_exercise_always_advances_even_when_wrong() {
    let root = static_root();
    let (mut s, _) = session(&root, CheckPolicy::RetryOnIncorrect);
    s.advance(Some(Decision::Language("asl".into()))).unwrap();
    s.advance(None).unwrap();

    s.select("ANH").unwrap();
    assert_eq!(s.check().unwrap(), Outcome::Incorrect);
    assert!(s.proceed().unwrap().is_some());
    assert_eq!(s.flow().state().answer_for(StepId::DemoFillGap), Some("ANH"));
}

#[test]
fn lesson_flow_retries_with_configured_policy() {
    let root = static_root();
    let flow = flows::fill_gap_lesson().build().unwrap();
    let resolver = AssetResolver::new("/resources/videos/", FsMediaSource::new(root.path()));
    let mut s = LearningSession::new(flow, resolver, CheckPolicy::RetryOnIncorrect);

    s.select("BẠN").unwrap();
    assert_eq!(s.check().unwrap(), Outcome::Incorrect);
    assert_eq!(s.proceed().unwrap(), None);
    assert_eq!(s.lesson().unwrap().index(), 0);

    let mut moved = None;
    while moved.is_none() {
        let correct = s.lesson().unwrap().exercise().unwrap().question().correct().to_string();
        s.select(&correct).unwrap();
        s.check().unwrap();
        moved = s.proceed().unwrap();
    }
    assert_eq!(s.view().step.id, StepId::Completion);
    assert_eq!(s.flow().state().correct_answers(), 3);
    assert_eq!(s.flow().state().lesson_score(StepId::FillGap), Some(2));
    assert!(s.lesson().is_none());
    assert!(matches!(s.select("x"), Err(CoreError::Domain(_))));
}

#[test]
fn completed_lesson_hands_every_answer_to_the_hook() {
    let root = static_root();
    let finished: Rc<RefCell<Option<FlowState>>> = Rc::default();
    let sink = finished.clone();
    let flow = flows::fill_gap_lesson().on_complete(move |st| *sink.borrow_mut() = Some(st.clone()))
                                       .build()
                                       .unwrap();
    let resolver = AssetResolver::new("/resources/videos/", FsMediaSource::new(root.path()));
    let mut s = LearningSession::new(flow, resolver, CheckPolicy::RetryOnIncorrect);

    let mut picked = Vec::new();
    while s.lesson().is_some() {
        let correct = s.lesson().unwrap().exercise().unwrap().question().correct().to_string();
        s.select(&correct).unwrap();
        assert_eq!(s.check().unwrap(), Outcome::Correct);
        s.proceed().unwrap();
        picked.push(correct);
    }
    assert_eq!(s.advance(None).unwrap(), AdvanceOutcome::Completed);

    let st = finished.borrow().clone().expect("completion callback");
    assert_eq!(picked.len(), 3);
    assert_eq!(st.correct_answers(), 3);
    assert_eq!(st.lesson_score(StepId::FillGap), Some(3));
    assert_eq!(st.answers_for(StepId::FillGap), picked.iter().map(String::as_str).collect::<Vec<_>>());
}
