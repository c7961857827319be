use clap::Parser;
use cube_intersection::utils::error::ErrorCategory;
use cube_intersection::utils::{logger, validation::Validate};
use cube_intersection::{
    CliConfig, Command, CubeEngine, CubeError, Cuboid, EngineSettings, InMemoryCubeStore,
    SceneConfig,
};
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("🚀 Starting cube-intersection");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.category() {
            ErrorCategory::Validation | ErrorCategory::Configuration => 1,
            ErrorCategory::NotFound | ErrorCategory::Conflict => 2,
            ErrorCategory::System => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(config: &CliConfig) -> Result<(), CubeError> {
    let scene = match &config.scene {
        Some(path) => {
            tracing::info!("📁 Loading scene from: {}", path.display());
            SceneConfig::from_file(path)?
        }
        None => {
            tracing::warn!("No scene given, starting with an empty store");
            SceneConfig::default()
        }
    };
    scene.validate_cubes()?;

    let settings: EngineSettings = scene
        .engine
        .clone()
        .with_overrides(config.overlap_rule, config.workers);
    settings.validate()?;
    tracing::info!(
        "🔧 Overlap rule: {:?}, workers: {}",
        settings.overlap_rule,
        settings.workers
    );

    let engine = CubeEngine::new(InMemoryCubeStore::new(), settings);
    scene.load_into(&engine).await?;

    match &config.command {
        Command::List => print_json(&engine.get_all().await),
        Command::Get { id } => match engine.get(id).await {
            Some(cube) => print_json(&CubeView {
                volume: cube.volume(),
                cube: &cube,
            }),
            None => Err(CubeError::NotFoundError { id: id.clone() }),
        },
        Command::Collisions { id, with } => {
            let hits = match with {
                Some(ids) => engine.collisions_of(id, ids).await?,
                None => engine.collisions_of_against_all(id).await?,
            };
            print_json(&hits)
        }
        Command::Intersections { id, with } => {
            let hits = match with {
                Some(ids) => engine.intersections_of(id, ids).await?,
                None => engine.intersections_of_against_all(id).await?,
            };
            print_json(&hits)
        }
        Command::AllCollisions => print_json(&engine.all_collisions().await?),
        Command::AllIntersections => print_json(&engine.all_intersections().await?),
    }
}

#[derive(Serialize)]
struct CubeView<'a> {
    #[serde(flatten)]
    cube: &'a Cuboid,
    volume: f64,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CubeError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
