use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use raygen::generators;
use raygen::scene::Scene;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    Shell,
    ShellChecker,
    Scatter,
    ScatterMotion,
    TwoSpheres,
    Earth,
    Noise,
    Quads,
    SimpleLights,
    CornellBox,
}

impl AvailableScene {
    fn build(self, rng: &mut ChaCha8Rng) -> Scene {
        match self {
            AvailableScene::Shell => generators::shell(rng),
            AvailableScene::ShellChecker => generators::shell_checker(rng),
            AvailableScene::Scatter => generators::scatter(rng),
            AvailableScene::ScatterMotion => generators::scatter_motion(rng),
            AvailableScene::TwoSpheres => generators::two_spheres(rng),
            AvailableScene::Earth => generators::earth(),
            AvailableScene::Noise => generators::noise_spheres(),
            AvailableScene::Quads => generators::quads(),
            AvailableScene::SimpleLights => generators::simple_lights(),
            AvailableScene::CornellBox => generators::cornell_box(),
        }
    }
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(value_enum)]
    /// Scene generator to run
    scene: AvailableScene,

    #[arg(long, default_value_t = 0)]
    /// Seed for the generator's random stream
    seed: u64,

    #[arg(short, long)]
    /// Write the document to this file instead of stdout
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    log::info!("generating {:?} with seed {}", args.scene, args.seed);

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let scene = args.scene.build(&mut rng);
    scene.validate();

    log::info!(
        "{} objects, {} materials, {} textures",
        scene.objects.len(),
        scene.materials.len(),
        scene.textures.len(),
    );

    let contents = serde_json::to_string_pretty(&scene)?;
    match args.output {
        Some(path) => fs::write(path, contents)?,
        None => println!("{contents}"),
    }

    Ok(())
}
