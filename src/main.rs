//! Solids - procedural cube, cylinder and sphere meshes
//!
//! Builds the configured scene headlessly, reports what a renderer would
//! upload and draw, and optionally exports the meshes as JSON.

mod export;
mod settings;

use anyhow::{Context, Result};
use solids_mesh::HostUploader;
use solids_scene::{ControlState, Scene};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use settings::AppSettings;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    info!("Starting solids...");

    let settings = AppSettings::load();
    if AppSettings::settings_path().is_some_and(|path| !path.exists()) {
        if let Err(e) = settings.save() {
            warn!("Could not write default settings: {}", e);
        }
    }

    let mut scene = Scene::new(settings.scene.clone(), HostUploader::new())
        .context("Failed to build scene")?;

    for (handle, entry) in scene.registry().iter() {
        let (min, max) = entry.mesh.bounds().unwrap_or_default();
        info!(
            "#{} '{}' ({}): {} vertices, {} triangles, bounds {} .. {}",
            handle.id(),
            entry.name,
            entry.params.kind(),
            entry.mesh.vertex_count(),
            entry.mesh.triangle_count(),
            min,
            max
        );
        if entry.mesh.indices_u16().is_err() {
            warn!("'{}' does not fit 16-bit indices", entry.name);
        }
    }
    info!(
        "Uploaded {} bytes of vertex and index data",
        scene.registry().uploader().uploaded_bytes()
    );

    // Headless run with no input held
    let controls = ControlState::new();
    let frame_secs = settings.frame_secs.max(1e-3);
    let frames = (settings.simulate_secs.max(0.0) / frame_secs).round() as u32;
    for _ in 0..frames {
        scene.update(&controls, frame_secs);
    }

    info!(
        "After {:.2}s (spin {:.2} rad):",
        scene.elapsed(),
        scene.spin_angle()
    );
    for draw in scene.drawables(settings.aspect_ratio) {
        let center = draw
            .uniforms
            .world_view_projection()
            .project_point3(draw.mesh.params.center());
        info!(
            "  draw '{}' ({} indices), center projects to {}",
            draw.mesh.name, draw.mesh.buffers.index_count, center
        );
    }

    if let Some(dir) = &settings.export_dir {
        let written = export::export_all(scene.registry(), dir)?;
        info!("Exported {} meshes to {:?}", written.len(), dir);
        for path in &written {
            let reloaded = export::load_export(path)?;
            reloaded
                .mesh
                .validate()
                .with_context(|| format!("Exported mesh {:?} is inconsistent", path))?;
        }
    }

    Ok(())
}
