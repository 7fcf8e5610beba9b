use std::path::PathBuf;

// Re-export types from library crates
pub use print_impose::{DiagramConfig, ImpositionRecord, LayoutSummary};
pub use print_workorder::{WorkOrder, WorkOrderOptions};

/// Output format for an exported diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramFormat {
    Svg,
    Pdf,
}

impl DiagramFormat {
    /// Pick the format from a file extension, defaulting to SVG
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DiagramFormat::Pdf,
            _ => DiagramFormat::Svg,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DiagramFormat::Svg => "svg",
            DiagramFormat::Pdf => "pdf",
        }
    }
}

/// Commands sent from UI to worker
#[derive(Debug)]
pub enum PrintCommand {
    RecordLoad {
        path: PathBuf,
    },
    RecordSave {
        record: ImpositionRecord,
        path: PathBuf,
    },
    DiagramExport {
        record: ImpositionRecord,
        config: DiagramConfig,
        format: DiagramFormat,
        output_path: PathBuf,
    },
    WorkOrderLoad {
        path: PathBuf,
    },
    WorkOrderSave {
        order: WorkOrder,
        path: PathBuf,
    },
    WorkOrderGenerate {
        order: WorkOrder,
        options: WorkOrderOptions,
        output_path: PathBuf,
    },
}

/// Updates sent from worker to UI
#[derive(Debug, Clone)]
pub enum PrintUpdate {
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    RecordLoaded {
        record: ImpositionRecord,
        path: PathBuf,
    },
    RecordSaved {
        path: PathBuf,
    },
    DiagramExported {
        path: PathBuf,
        truncated: bool,
    },
    WorkOrderLoaded {
        order: WorkOrder,
        path: PathBuf,
    },
    WorkOrderSaved {
        path: PathBuf,
    },
    WorkOrderGenerated {
        path: PathBuf,
        page_count: usize,
    },
    Error {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DiagramFormat::from_path(Path::new("a.pdf")), DiagramFormat::Pdf);
        assert_eq!(DiagramFormat::from_path(Path::new("a.PDF")), DiagramFormat::Pdf);
        assert_eq!(DiagramFormat::from_path(Path::new("a.svg")), DiagramFormat::Svg);
        assert_eq!(DiagramFormat::from_path(Path::new("diagram")), DiagramFormat::Svg);
    }
}
