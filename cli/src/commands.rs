use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use core_drive::{Coordinator, TrainingCoordinator};
use core_net::{parse_patterns, NetBuilder, Network, Pattern};
use tracing::info;

use crate::config::{load_settings, RunSettings, TrainSettings};

pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let settings: RunSettings = load_settings("run", config_path)?;
    let mut net = load_net(&settings.net)?;
    let patterns = load_stream(&settings.patterns, net.layer(0).len())?;
    info!(patterns = patterns.len(), "input stream loaded");

    let mut coordinator = Coordinator::new(&net, patterns)?;
    coordinator.run(&mut net, None)?;
    let produced = coordinator.reader().export();

    match &settings.output {
        Some(path) => {
            write_text_file(path, &produced)?;
            println!("Output pattern written to {}", path.display());
        }
        None => println!("{produced}"),
    }
    Ok(())
}

pub fn train(config_path: Option<PathBuf>) -> Result<()> {
    let settings: TrainSettings = load_settings("train", config_path)?;
    let mut net = load_net(&settings.net)?;
    let input = load_stream(&settings.patterns, net.layer(0).len())?;
    let output_width = net.layers().last().map(|l| l.len()).unwrap_or(0);
    let desired = load_stream(&settings.desired, output_width)?;

    for epoch in 0..settings.epochs {
        let mut coordinator = TrainingCoordinator::new(&net, input.clone(), desired.clone())?;
        coordinator.run(&mut net, None)?;
        info!(epoch, produced = %coordinator.reader().export(), "epoch complete");
    }

    let document = nnml::encode(&net)?;
    write_text_file(&settings.save, &document)?;
    println!("Trained net written to {}", settings.save.display());
    Ok(())
}

pub fn demo() -> Result<()> {
    let mut builder = NetBuilder::new();
    let input = builder.add_binary_layer(&[0.8, 0.8]);
    let output = builder.add_binary_layer(&[1.0]);
    builder.connect((input, 0), (output, 0), 0.6);
    builder.connect((input, 1), (output, 0), 0.6);
    let mut net = builder.build()?;

    println!("Two-input conjunction demonstration:");
    for case in ["00", "01", "10", "11"] {
        let patterns = parse_patterns(case, 2)?;
        let mut coordinator = Coordinator::new(&net, patterns)?;
        coordinator.run(&mut net, None)?;
        println!("{case} -> {}", coordinator.reader().export());
    }
    Ok(())
}

fn load_net(path: &Path) -> Result<Network> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read net from {}", path.display()))?;
    let net = nnml::decode(&text)
        .with_context(|| format!("failed to parse NNML document at {}", path.display()))?;
    Ok(net)
}

fn load_stream(path: &Path, width: usize) -> Result<Vec<Pattern>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read pattern stream from {}", path.display()))?;
    let patterns = parse_patterns(raw.trim(), width)
        .with_context(|| format!("failed to parse pattern stream at {}", path.display()))?;
    Ok(patterns)
}

fn write_text_file(path: &Path, body: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_net::test_helpers::fan_in;

    #[test]
    fn nets_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nets/and.nnml");
        let net = fan_in(1.0, 0.6);
        write_text_file(&path, &nnml::encode(&net).unwrap()).unwrap();

        let restored = load_net(&path).unwrap();
        assert_eq!(restored.layer_count(), net.layer_count());
        assert_eq!(restored.synapses.len(), net.synapses.len());
    }

    #[test]
    fn streams_reject_foreign_characters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.bits");
        std::fs::write(&path, "01a1\n").unwrap();
        assert!(load_stream(&path, 2).is_err());
    }
}
