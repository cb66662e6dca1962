use cairo::{Context, Format, ImageSurface};
use shape_canvas::core::config;
use shape_canvas::core::types::Color;
use shape_canvas::demo::draw_showcase;
use shape_canvas::{CairoSurface, ShapeRenderer};
use std::fs::File;

struct Args {
    out: String,
    width: i32,
    height: i32,
}

fn parse_args() -> Args {
    let mut args = Args {
        out: config::DEMO_OUTPUT.to_string(),
        width: config::DEMO_WIDTH,
        height: config::DEMO_HEIGHT,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--out" if i + 1 < argv.len() => {
                i += 1;
                args.out = argv[i].clone();
            }
            "--width" if i + 1 < argv.len() => {
                i += 1;
                args.width = argv[i].parse().unwrap_or(config::DEMO_WIDTH);
            }
            "--height" if i + 1 < argv.len() => {
                i += 1;
                args.height = argv[i].parse().unwrap_or(config::DEMO_HEIGHT);
            }
            other => log::warn!("Ignoring argument: {}", other),
        }
        i += 1;
    }

    args
}

fn main() {
    env_logger::init();

    let args = parse_args();
    if args.width <= 0 || args.height <= 0 {
        eprintln!("Usage: shape-canvas [--out <file.png>] [--width <px>] [--height <px>]");
        std::process::exit(1);
    }

    let image = match ImageSurface::create(Format::ARgb32, args.width, args.height) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Failed to create image surface: {}", e);
            std::process::exit(1);
        }
    };
    let cr = match Context::new(&image) {
        Ok(cr) => cr,
        Err(e) => {
            eprintln!("Failed to create Cairo context: {}", e);
            std::process::exit(1);
        }
    };

    let surface = CairoSurface::new(cr, args.width as f64, args.height as f64);
    let mut renderer = ShapeRenderer::new(surface);
    renderer.clear();

    let bg = Color::from_hex(config::DEMO_BACKGROUND, 1.0);
    let cr = renderer.surface().context();
    cr.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
    if let Err(e) = cr.paint() {
        log::warn!("Background paint failed: {}", e);
    }

    if let Err(e) = draw_showcase(&mut renderer) {
        eprintln!("Rendering failed: {}", e);
        std::process::exit(1);
    }
    // Release the context so the image surface is no longer shared.
    drop(renderer);

    let written = File::create(&args.out)
        .map_err(|e| e.to_string())
        .and_then(|mut file| image.write_to_png(&mut file).map_err(|e| e.to_string()));
    match written {
        Ok(()) => log::info!("Wrote {}x{} showcase to {}", args.width, args.height, args.out),
        Err(e) => {
            eprintln!("Failed to write {}: {}", args.out, e);
            std::process::exit(1);
        }
    }
}
