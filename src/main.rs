//! Demo guionizada del onboarding: elige idioma, ve la lección, resuelve el
//! ejercicio y llega al cierre, cargando los videos por el camino.
use log::{info, warn};
use signflow::assets::{AssetResolver, SlotState};
use signflow::core::{flows, AdvanceOutcome, Decision};
use signflow::{AppConfig, CoreError, LearningSession};

#[tokio::main]
async fn main() {
    signflow::init_logging();
    if let Err(e) = run().await {
        eprintln!("[signflow-demo] {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CoreError> {
    let cfg = AppConfig::from_env()?;
    let resolver = AssetResolver::from_config(&cfg.assets)?;

    let flow = flows::onboarding().on_complete(|st| match serde_json::to_string_pretty(st) {
                                      Ok(json) => println!("Onboarding completado:\n{json}"),
                                      Err(e) => warn!("cannot serialize final state: {e}"),
                                  })
                                  .build()?;
    let mut session = LearningSession::new(flow, resolver, cfg.lesson_policy);

    // 1. idioma
    describe(&session);
    session.advance(Some(Decision::Language("vsl".into())))?;

    // 2. lección demo con video
    describe(&session);
    session.load_media().await;
    report_media(&session);
    session.advance(None)?;

    // 3. ejercicio demo
    describe(&session);
    session.load_media().await;
    report_media(&session);
    session.select("BẠN")?;
    let outcome = session.check()?;
    info!("respuesta corregida: {outcome:?}");
    session.proceed()?;

    // 4. cierre
    describe(&session);
    match session.advance(None)? {
        AdvanceOutcome::Completed => info!("flujo completado"),
        other => warn!("unexpected outcome {other:?}"),
    }
    Ok(())
}

fn describe<S: signflow::assets::MediaSource>(session: &LearningSession<S>) {
    let view = session.view();
    println!("[{:>3}%] paso {}/{}: {}",
             session.flow().progress_percent(),
             view.step.position + 1,
             view.total,
             view.step.id.as_str());
}

fn report_media<S: signflow::assets::MediaSource>(session: &LearningSession<S>) {
    match session.slot().state() {
        SlotState::Ready(meta) => println!("  video listo: {} ({:?})", meta.url, meta.content_type),
        SlotState::Placeholder { url, reason } => println!("  video no disponible ({reason}): {url}"),
        SlotState::Loading { .. } | SlotState::Empty => {}
    }
}
