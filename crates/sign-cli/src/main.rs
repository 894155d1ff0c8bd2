use clap::{Parser, Subcommand};
use log::debug;
use signflow::assets::{AssetResolver, ConfiguredSource, SlotState};
use signflow::core::flows::{self, LANGUAGES};
use signflow::core::{AdvanceOutcome, CheckPolicy, Decision, FillGapPhase, Outcome, StepKind};
use signflow::{AppConfig, CoreError, LearningSession};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Parser, Debug)]
#[command(name = "sign-cli", about = "Recorre los flujos de la app desde la terminal")]
struct Cli {
    /// Origen http de los videos (sobrescribe ASSET_ORIGIN)
    #[arg(long)]
    origin: Option<String>,
    /// Directorio local que sirve los videos (sobrescribe ASSET_STATIC_ROOT)
    #[arg(long)]
    static_root: Option<std::path::PathBuf>,
    /// Política ante respuestas incorrectas: retry | advance
    #[arg(long)]
    policy: Option<CheckPolicy>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Selección de idioma, lección demo, ejercicio demo y cierre
    Onboarding,
    /// Lección completa de ejercicios fill-gap
    Lesson,
    /// Resuelve una clave de contenido y comprueba si el video existe
    Resolve { key: String },
}

type Input = Lines<BufReader<Stdin>>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    signflow::init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("[sign-cli] {e}");
        std::process::exit(2);
    }
}

async fn run(cli: Cli) -> Result<(), CoreError> {
    let mut cfg = AppConfig::from_env()?;
    if let Some(origin) = cli.origin {
        cfg.assets.origin = Some(origin.parse().map_err(|e| CoreError::Config(format!("--origin: {e}")))?);
    }
    if let Some(root) = cli.static_root {
        cfg.assets.static_root = Some(root);
    }
    if let Some(policy) = cli.policy {
        cfg.lesson_policy = policy;
    }
    let resolver = AssetResolver::from_config(&cfg.assets)?;

    let builder = match cli.command {
        Command::Resolve { key } => {
            let url = resolver.resolve(&key);
            let exists = resolver.exists(url).await;
            println!("{key} -> {url} ({})", if exists { "disponible" } else { "no disponible" });
            return Ok(());
        }
        Command::Onboarding => flows::onboarding(),
        Command::Lesson => flows::fill_gap_lesson(),
    };

    let flow = builder.on_complete(|st| match serde_json::to_string_pretty(st) {
                          Ok(json) => println!("\n¡Listo! Estado final:\n{json}"),
                          Err(e) => eprintln!("[sign-cli] cannot serialize final state: {e}"),
                      })
                      .build()?;
    let mut session = LearningSession::new(flow, resolver, cfg.lesson_policy);
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    drive(&mut session, &mut input).await
}

async fn drive(session: &mut LearningSession<ConfiguredSource>, input: &mut Input) -> Result<(), CoreError> {
    loop {
        let step = session.view().step;
        println!("\n== [{:>3}%] {} ==", session.flow().progress_percent(), step.id.as_str());

        if matches!(session.slot().state(), SlotState::Empty) && session.load_media().await {
            match session.slot().state() {
                SlotState::Ready(meta) => println!("(video: {})", meta.url),
                SlotState::Placeholder { url, reason } => println!("(video no disponible: {url}, {reason})"),
                _ => {}
            }
        }

        match step.kind {
            StepKind::Selection => {
                for (i, l) in LANGUAGES.iter().enumerate() {
                    println!("  {}. {} {} [{}]", i + 1, l.flag, l.name, l.id);
                }
                println!("elige idioma (número o id), b = atrás, q = salir");
            }
            StepKind::Lesson => println!("enter = continuar, b = atrás, q = salir"),
            StepKind::Exercise => render_exercise(session),
            StepKind::Completion => println!("enter = terminar, b = atrás"),
        }

        let Some(line) = input.next_line().await? else {
            return Ok(());
        };
        let line = line.trim();
        match line {
            "q" => return Ok(()),
            "b" => {
                if !session.retreat() {
                    println!("ya estás en el primer paso");
                }
                continue;
            }
            _ => {}
        }

        let result = match step.kind {
            StepKind::Selection => {
                let id = line.parse::<usize>()
                             .ok()
                             .and_then(|n| n.checked_sub(1))
                             .and_then(|i| LANGUAGES.get(i))
                             .map(|l| l.id.to_string())
                             .unwrap_or_else(|| line.to_string());
                session.advance(Some(Decision::Language(id))).map(|_| ())
            }
            StepKind::Lesson => session.advance(None).map(|_| ()),
            StepKind::Exercise => exercise_input(session, line),
            StepKind::Completion => match session.advance(None) {
                Ok(AdvanceOutcome::Completed) => return Ok(()),
                other => other.map(|_| ()),
            },
        };
        if let Err(e) = result {
            println!("  ! {e}");
        }
    }
}

fn render_exercise(session: &LearningSession<ConfiguredSource>) {
    let Some(ex) = session.lesson().and_then(|l| l.exercise()) else {
        return;
    };
    let q = ex.question();
    println!("  {}", q.render(ex.selection()));
    for (i, o) in q.options().iter().enumerate() {
        let mark = if ex.selection() == Some(o.as_str()) { "*" } else { " " };
        println!("  {mark}{}. {o}", i + 1);
    }
    match ex.phase() {
        FillGapPhase::Unanswered => println!("elige una opción (número)"),
        FillGapPhase::Answered(_) => println!("c = comprobar, o elige otra opción"),
        FillGapPhase::Checked { outcome: Outcome::Correct, .. } => println!("¡Correcto! enter = continuar"),
        FillGapPhase::Checked { .. } => println!("Incorrecto (era {}). enter = continuar", q.correct()),
    }
}

fn exercise_input(session: &mut LearningSession<ConfiguredSource>, line: &str) -> Result<(), CoreError> {
    let checked = session.lesson()
                         .and_then(|l| l.exercise())
                         .is_some_and(|ex| ex.outcome().is_some());
    if checked {
        if let Some(out) = session.proceed()? {
            debug!("exercise step finished: {out:?}");
        }
        return Ok(());
    }
    if line == "c" {
        session.check()?;
        return Ok(());
    }
    let option = session.lesson()
                        .and_then(|l| l.exercise())
                        .and_then(|ex| {
                            line.parse::<usize>()
                                .ok()
                                .and_then(|n| n.checked_sub(1))
                                .and_then(|i| ex.question().options().get(i).cloned())
                        })
                        .unwrap_or_else(|| line.to_string());
    session.select(&option)
}
