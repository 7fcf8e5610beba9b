use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use print_impose::render::{diagram_to_pdf, to_svg};
use print_impose::{
    DiagramConfig, ImpositionRecord, Orientation, RenderMode, SheetPreset, render_diagram_with,
    summarize,
};
use print_workorder::{WorkOrder, WorkOrderOptions};
use std::path::{Path, PathBuf};

/// Non-printable margin used when a sheet is given without a valid area
const DEFAULT_SHEET_MARGIN_MM: f32 = 10.0;

#[derive(Parser)]
#[command(name = "prt", about = "Print shop imposition tools", version)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate how many products fit on a sheet
    Layout {
        #[command(flatten)]
        dimensions: DimensionArgs,

        /// Print the recomputed record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render an imposition diagram as SVG or PDF
    Diagram {
        #[command(flatten)]
        dimensions: DimensionArgs,

        /// Output file (.svg or .pdf)
        #[arg(short, long)]
        output: PathBuf,

        /// Diagram preset
        #[arg(long, default_value = "preview", value_enum)]
        mode: ModeArg,

        /// Diagram configuration JSON (overrides --mode)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate a work-order PDF from an order JSON file
    WorkOrder {
        /// Input order JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Shop name printed under the title
        #[arg(long)]
        shop_name: Option<String>,

        /// Draw diagrams in black and grey
        #[arg(long)]
        monochrome: bool,
    },
}

/// Physical dimensions in millimeters; flags override values from `--record`
#[derive(Args, Default)]
struct DimensionArgs {
    /// Imposition record JSON to start from
    #[arg(long)]
    record: Option<PathBuf>,

    /// Trimmed product size, e.g. 210x297
    #[arg(long, value_parser = parse_dimensions)]
    product: Option<(f32, f32)>,

    /// Sheet size, e.g. 700x1000
    #[arg(long, value_parser = parse_dimensions, conflicts_with = "preset")]
    sheet: Option<(f32, f32)>,

    /// Standard sheet size
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Printable area size, centered in the sheet
    #[arg(long, value_parser = parse_dimensions, conflicts_with = "sheet_margin")]
    valid: Option<(f32, f32)>,

    /// Non-printable margin on every side of the sheet
    #[arg(long)]
    sheet_margin: Option<f32>,

    /// Bleed on every side of the product
    #[arg(long)]
    bleed: Option<f32>,

    /// Space between columns
    #[arg(long)]
    gutter_h: Option<f32>,

    /// Space between rows
    #[arg(long)]
    gutter_v: Option<f32>,

    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    B1,
    B2,
    Sra1,
    Sra2,
    Sra3,
    A3,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Compact,
    Preview,
    Print,
}

impl From<PresetArg> for SheetPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::B1 => Self::B1,
            PresetArg::B2 => Self::B2,
            PresetArg::Sra1 => Self::SRA1,
            PresetArg::Sra2 => Self::SRA2,
            PresetArg::Sra3 => Self::SRA3,
            PresetArg::A3 => Self::A3,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Horizontal => Self::Horizontal,
            OrientationArg::Vertical => Self::Vertical,
        }
    }
}

/// Parse `WxH` (also `W×H`) in millimeters
fn parse_dimensions(value: &str) -> std::result::Result<(f32, f32), String> {
    let normalized = value.trim().replace(['×', 'X'], "x");
    let (w, h) = normalized
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;

    let parse = |part: &str, name: &str| {
        let number: f32 = part
            .trim()
            .parse()
            .map_err(|_| format!("invalid {name} '{}' in '{value}'", part.trim()))?;
        if number.is_finite() && number >= 0.0 {
            Ok(number)
        } else {
            Err(format!("{name} must be a non-negative number, got '{value}'"))
        }
    };

    Ok((parse(w, "width")?, parse(h, "height")?))
}

impl DimensionArgs {
    /// Build the record: load `--record` if given, then apply flag overrides
    async fn to_record(&self) -> Result<ImpositionRecord> {
        let mut record = match &self.record {
            Some(path) => ImpositionRecord::load(path)
                .await
                .with_context(|| format!("Failed to load record {}", path.display()))?,
            None => {
                if self.product.is_none() {
                    bail!("--product is required unless --record is given");
                }
                ImpositionRecord::default()
            }
        };
        self.apply(&mut record);
        Ok(record)
    }

    fn apply(&self, record: &mut ImpositionRecord) {
        record.update(|input| {
            let sheet = match (self.preset, self.sheet) {
                (Some(preset), _) => Some(SheetPreset::from(preset)),
                (None, Some((width_mm, height_mm))) => Some(SheetPreset::Custom {
                    width_mm,
                    height_mm,
                }),
                (None, None) => None,
            };

            if let Some(sheet) = sheet {
                let margin = self.sheet_margin.unwrap_or(DEFAULT_SHEET_MARGIN_MM);
                input.apply_sheet(sheet, margin);
            } else if let Some(margin) = self.sheet_margin {
                let (w, h) = (input.sheet_width, input.sheet_height);
                input.apply_sheet(
                    SheetPreset::Custom {
                        width_mm: w,
                        height_mm: h,
                    },
                    margin,
                );
            }

            if let Some((w, h)) = self.valid {
                input.valid_width = w;
                input.valid_height = h;
            }
            if let Some((w, h)) = self.product {
                input.product_width = w;
                input.product_height = h;
            }
            if let Some(bleed) = self.bleed {
                input.bleed = bleed;
            }
            if let Some(gutter) = self.gutter_h {
                input.gutter_h = gutter;
            }
            if let Some(gutter) = self.gutter_v {
                input.gutter_v = gutter;
            }
            if let Some(orientation) = self.orientation {
                input.orientation = orientation.into();
            }
        });
    }
}

fn print_layout(record: &ImpositionRecord) {
    let input = record.input();
    let summary = summarize(record);

    println!("Imposition Layout:");
    println!(
        "  Sheet: {} × {} mm (valid area {} × {} mm)",
        input.sheet_width, input.sheet_height, input.valid_width, input.valid_height
    );
    println!(
        "  Product: {} × {} mm, bleed {} mm (footprint {} × {} mm)",
        input.product_width,
        input.product_height,
        input.bleed,
        summary.footprint.0,
        summary.footprint.1
    );
    println!("  Gutters: {} × {} mm", input.gutter_h, input.gutter_v);
    println!("  Orientation: {}", input.orientation.name());
    println!("  Repetitions: {}", summary.repetitions_label());
    println!(
        "  Used span: {:.1} × {:.1} mm (leftover {:.1} × {:.1} mm)",
        summary.used_span.0, summary.used_span.1, summary.leftover.0, summary.leftover.1
    );
    println!("  Utilization: {:.1}%", summary.utilization);
}

async fn diagram_config(
    mode: ModeArg,
    config: Option<&Path>,
    record: &ImpositionRecord,
) -> Result<DiagramConfig> {
    if let Some(path) = config {
        return DiagramConfig::load(path)
            .await
            .with_context(|| format!("Failed to load diagram config {}", path.display()));
    }
    let input = record.input();
    Ok(match mode {
        ModeArg::Compact => DiagramConfig::compact(),
        ModeArg::Preview => DiagramConfig::for_mode(
            RenderMode::Interactive,
            input.sheet_width,
            input.sheet_height,
        ),
        ModeArg::Print => {
            DiagramConfig::for_mode(RenderMode::Print, input.sheet_width, input.sheet_height)
        }
    })
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Layout { dimensions, json } => {
            let record = dimensions.to_record().await?;
            if json {
                println!("{}", record.to_json()?);
            } else {
                print_layout(&record);
            }
        }

        Commands::Diagram {
            dimensions,
            output,
            mode,
            config,
        } => {
            let record = dimensions.to_record().await?;
            let config = diagram_config(mode, config.as_deref(), &record).await?;
            let diagram = render_diagram_with(&record, &config);

            if is_pdf(&output) {
                print_impose::save_pdf(diagram_to_pdf(&diagram)?, &output).await?;
            } else {
                print_impose::save_svg(&to_svg(&diagram), &output).await?;
            }

            println!(
                "Diagram ({}) → {}",
                summarize(&record).repetitions_label(),
                output.display()
            );
            if diagram.truncated {
                println!(
                    "  Grid drawn as one block: more than {} cells",
                    config.max_cells
                );
            }
        }

        Commands::WorkOrder {
            input,
            output,
            shop_name,
            monochrome,
        } => {
            let order = WorkOrder::load(&input)
                .await
                .with_context(|| format!("Failed to load work order {}", input.display()))?;
            let options = WorkOrderOptions {
                shop_name,
                monochrome,
                ..Default::default()
            };

            let doc = print_workorder::generate_work_order(&order, &options).await?;
            let page_count = doc.get_pages().len();
            print_workorder::save_pdf(doc, &output).await?;

            println!(
                "Work order {} ({} line items, {} pages) → {}",
                order.order_number,
                order.line_items.len(),
                page_count,
                output.display()
            );
        }
    }

    Ok(())
}
