use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use vdraw::config::Config;
use vdraw::export::{ExportFormat, ensure_directory_exists, resolve_output_path};
use vdraw::input::{Canvas, Tool};
use vdraw::session::Session;
use vdraw::util::{Point, parse_color};

#[derive(Parser, Debug)]
#[command(name = "vdraw")]
#[command(version, about = "Two-click vector drawing editor")]
struct Cli {
    /// Drawing document to open (one object per line)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Place an object with a two-click gesture, e.g. `circle:10,10:20,10`
    #[arg(long = "draw", value_name = "TOOL:X1,Y1:X2,Y2", value_parser = parse_gesture)]
    draw: Vec<Gesture>,

    /// Foreground color for --draw (name or r,g,b)
    #[arg(long, value_name = "COLOR")]
    fg: Option<String>,

    /// Background color for --draw (name or r,g,b)
    #[arg(long, value_name = "COLOR")]
    bg: Option<String>,

    /// Replace the properties of object INDEX (0-based), e.g. `0=1 2 3 4 255 0 0`
    #[arg(long = "edit", value_name = "INDEX=FIELDS")]
    edit: Vec<String>,

    /// Print one label per object
    #[arg(long, action = ArgAction::SetTrue)]
    list: bool,

    /// Write the document to PATH
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Export a raster image to PATH (file or directory; configured directory if omitted)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Export format: jpg, png or gif
    #[arg(long, value_name = "FORMAT", requires = "export")]
    format: Option<String>,

    /// Use this config file instead of ~/.config/vdraw/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

/// One two-click gesture from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gesture {
    tool: Tool,
    start: Point,
    end: Point,
}

fn parse_point(text: &str) -> Result<Point, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", text))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad X coordinate '{}': {}", x, e))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad Y coordinate '{}': {}", y, e))?;
    Ok(Point::new(x, y))
}

fn parse_gesture(text: &str) -> Result<Gesture, String> {
    let parts: Vec<&str> = text.split(':').collect();
    let [tool, start, end] = parts.as_slice() else {
        return Err(format!("expected TOOL:X1,Y1:X2,Y2 but got '{}'", text));
    };
    Ok(Gesture {
        tool: tool.parse()?,
        start: parse_point(start)?,
        end: parse_point(end)?,
    })
}

fn parse_edit(text: &str) -> Result<(usize, Vec<&str>)> {
    let (index, fields) = text
        .split_once('=')
        .ok_or_else(|| anyhow!("expected INDEX=FIELDS but got '{}'", text))?;
    let index = index
        .trim()
        .parse::<usize>()
        .with_context(|| format!("bad object index '{}'", index))?;
    Ok((index, fields.split_whitespace().collect()))
}

fn print_usage() {
    println!("vdraw: Two-click vector drawing editor");
    println!();
    println!("Usage:");
    println!("  vdraw FILE --list                          List the objects of a document");
    println!("  vdraw --draw line:0,0:40,30 --save out.jvd Place objects and save them");
    println!("  vdraw FILE --export out.png                Render a document to an image");
    println!("  vdraw --init-config                        Write a default config file");
    println!("  vdraw --help                               Show help");
    println!();
    println!("Tools: line, circle, filled-circle (fcircle)");
    println!("Colors: red, green, blue, yellow, orange, pink, white, black, or r,g,b");
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    if cli.file.is_none() && cli.draw.is_empty() {
        print_usage();
        return Ok(());
    }

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut canvas = Canvas::new();
    canvas.set_foreground(config.foreground());
    canvas.set_background(config.background());
    canvas.set_tool(config.drawing.default_tool);
    if let Some(fg) = &cli.fg {
        canvas.set_foreground(parse_color(fg).ok_or_else(|| anyhow!("invalid color '{}'", fg))?);
    }
    if let Some(bg) = &cli.bg {
        canvas.set_background(parse_color(bg).ok_or_else(|| anyhow!("invalid color '{}'", bg))?);
    }
    let mut session = Session::with_canvas(canvas);

    if let Some(file) = &cli.file {
        let report = session
            .open(file)
            .with_context(|| format!("Failed to open {}", file.display()))?;
        for failure in &report.failures {
            eprintln!("line {}: {}", failure.line_number, failure.error);
        }
    }

    for gesture in &cli.draw {
        let canvas = session.canvas_mut();
        canvas.set_tool(Some(gesture.tool));
        canvas.on_click(gesture.start.x, gesture.start.y);
        canvas.on_pointer_move(gesture.end.x, gesture.end.y);
        canvas.on_click(gesture.end.x, gesture.end.y);
    }

    for edit in &cli.edit {
        let (index, fields) = parse_edit(edit)?;
        session
            .edit_object(index, &fields)
            .with_context(|| format!("Failed to edit object {}", index))?;
    }

    if cli.list {
        for label in session.labels() {
            println!("{}", label);
        }
    }

    if let Some(path) = &cli.save {
        session
            .save_as(path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }

    if let Some(target) = &cli.export {
        let settings = config.export_settings();
        let target = match target {
            Some(path) => path.clone(),
            None => ensure_directory_exists(&settings.directory)?,
        };
        let format = match &cli.format {
            Some(name) => name.parse::<ExportFormat>()?,
            None => ExportFormat::from_path(&target).unwrap_or(settings.format),
        };
        let path = resolve_output_path(&target, format, &settings.filename_template);
        session
            .export(&path, format)
            .with_context(|| format!("Failed to export {}", path.display()))?;
        println!("Exported to {}", path.display());
    }

    if session.has_unsaved_changes() && cli.save.is_none() {
        log::info!("Exiting with unsaved changes");
    }

    Ok(())
}
