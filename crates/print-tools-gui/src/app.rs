use eframe::egui;
use print_async_runtime::{PrintCommand, PrintUpdate};
use std::path::Path;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{ImpositionState, WorkOrderState, show_imposition, show_work_order};

#[derive(Default, PartialEq)]
enum Mode {
    #[default]
    Imposition,
    WorkOrder,
}

#[derive(Clone)]
struct ProgressState {
    operation: String,
    current: usize,
    total: usize,
}

pub struct PrintToolsApp {
    mode: Mode,
    status: String,

    imposition: ImpositionState,
    work_order: WorkOrderState,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<PrintCommand>,
    update_rx: mpsc::UnboundedReceiver<PrintUpdate>,

    progress: Option<ProgressState>,
    logger: AppLogger,

    _tokio_handle: tokio::runtime::Handle,
}

impl PrintToolsApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        tokio_handle.spawn(crate::worker::worker_task(command_rx, update_tx));

        Self {
            mode: Mode::default(),
            status: String::new(),
            imposition: ImpositionState::default(),
            work_order: WorkOrderState::default(),
            command_tx,
            update_rx,
            progress: None,
            logger,
            _tokio_handle: tokio_handle,
        }
    }

    /// Dropped JSON files open as a record or an order depending on the tab
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let paths: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .filter(|path| is_json(path))
                .collect()
        });

        for path in paths {
            let command = match self.mode {
                Mode::Imposition => PrintCommand::RecordLoad { path },
                Mode::WorkOrder => PrintCommand::WorkOrderLoad { path },
            };
            let _ = self.command_tx.send(command);
            self.status = "Loading...".to_string();
        }
    }

    fn apply_update(&mut self, update: PrintUpdate) {
        match update {
            PrintUpdate::Progress {
                operation,
                current,
                total,
            } => {
                self.progress = Some(ProgressState {
                    operation,
                    current,
                    total,
                });
                return;
            }
            PrintUpdate::RecordLoaded { record, path } => {
                self.status = format!(
                    "Loaded record {} ({} repetitions)",
                    path.display(),
                    record.result().total_repetitions
                );
                self.imposition.record = record;
                self.imposition.record_path = Some(path);
                self.mode = Mode::Imposition;
            }
            PrintUpdate::RecordSaved { path } => {
                self.status = format!("Saved record → {}", path.display());
            }
            PrintUpdate::DiagramExported { path, truncated } => {
                self.status = if truncated {
                    format!("Exported diagram → {} (grid drawn as one block)", path.display())
                } else {
                    format!("Exported diagram → {}", path.display())
                };
            }
            PrintUpdate::WorkOrderLoaded { order, path } => {
                self.status = format!(
                    "Loaded work order {} with {} line items",
                    order.order_number,
                    order.line_items.len()
                );
                self.work_order.load(order, path);
                self.mode = Mode::WorkOrder;
            }
            PrintUpdate::WorkOrderSaved { path } => {
                self.status = format!("Saved work order → {}", path.display());
            }
            PrintUpdate::WorkOrderGenerated { path, page_count } => {
                self.status = format!(
                    "Generated work order ({} pages) → {}",
                    page_count,
                    path.display()
                );
            }
            PrintUpdate::Error { message } => {
                log::error!("{message}");
                self.status = format!("Error: {message}");
            }
        }
        self.progress = None;
    }

    fn show_status_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if let Some(ref progress) = self.progress {
                ui.label(&progress.operation);
                ui.add(
                    egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                        .show_percentage(),
                );
                ctx.request_repaint();
            }

            let status = if self.status.is_empty() {
                self.logger.latest_message().unwrap_or_default()
            } else {
                self.status.clone()
            };
            ui.label(status);

            egui::CollapsingHeader::new("Log")
                .default_open(false)
                .show(ui, |ui| {
                    if ui.small_button("Clear").clicked() {
                        self.logger.clear();
                    }
                    egui::ScrollArea::vertical()
                        .max_height(160.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in self.logger.entries() {
                                ui.monospace(format!(
                                    "{} {:<5} {}: {}",
                                    entry.timestamp.format("%H:%M:%S"),
                                    entry.level,
                                    entry.target,
                                    entry.message
                                ));
                            }
                        });
                });
        });
    }
}

impl eframe::App for PrintToolsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);

        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            self.apply_update(update);
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.mode, Mode::Imposition, "📐 Imposition");
                ui.selectable_value(&mut self.mode, Mode::WorkOrder, "🧾 Work Order");
            });
        });

        self.show_status_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.mode {
            Mode::Imposition => show_imposition(ui, &mut self.imposition, &self.command_tx),
            Mode::WorkOrder => show_work_order(ui, &mut self.work_order, &self.command_tx),
        });
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
