//! Tabular data to chart configuration objects and static HTML pages
//!
//!     This crate turns tables of named numeric columns into the nested
//!     configuration objects the Highcharts / Highstock browser libraries take,
//!     then templates one or more of those objects into a single static HTML page.
//!     All rendering, interaction and axis layout happens in the browser; this
//!     crate only shapes data, merges options and writes the document.
//!
//!     TLDR for adding a chart kind:
//!         - Implement the ChartBuilder trait (see ./builders/mod.rs) and register it
//!           in BuilderRegistry::default.
//!         - A builder only assembles configuration: series from the frame's columns,
//!           chart-level fragments (zoom type, axis type), then the caller's display
//!           options merged last so they win.
//!         - Never write files or read the environment from a builder; the page module
//!           owns the single file write and the CLI owns the shell.
//!
//! Architecture
//!
//!     The pipeline is a straight line: Frame -> builder -> Chart -> Page -> HTML.
//!     A Frame (./frame.rs) is the input table: an index (positional, numeric,
//!     temporal or categorical) plus ordered named columns. Builders (./builders/)
//!     zip columns with the index into series and seed the chart-level option
//!     fragments their kind calls for. A Chart (./chart.rs) owns the option tree
//!     and its series, and serializes both into the configuration object the JS
//!     constructor takes. A Page (./page.rs) stacks charts into one document.
//!
//!     This is a pure lib: it powers chartab-cli but is shell agnostic, no code
//!     should be written here that supposes a shell environment, be it std print,
//!     env vars etc. The only I/O is the explicit page write.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── frame.rs            # Tabular input model
//!     ├── options.rs          # Option trees and the merge rule
//!     ├── series.rs           # Series kinds, points, per-series options
//!     ├── regression.rs       # Fitted trend overlays
//!     ├── chart.rs            # Chart configuration objects
//!     ├── scripts.rs          # Script includes for the page head
//!     ├── page.rs             # Multi-chart HTML assembly
//!     ├── builders
//!     │   ├── mod.rs          # ChartBuilder trait + BuilderRegistry
//!     │   └── <kind>.rs       # One builder per chart kind
//!     └── lib.rs
//!
//! Option Merging
//!
//!     Everything user-visible funnels through one merge rule (./options.rs):
//!     objects merge key-by-key, anything else is replaced wholesale, and options
//!     merge right-to-left so the later overlay always wins. Builders apply their
//!     own fragments first and the caller's display options last for exactly this
//!     reason.
//!
//! Library Choices
//!
//!     The configuration schema is owned by an external, versioned JS library, so
//!     the option tree stays an untyped serde_json::Value rather than a typed
//!     mirror of that schema: typed structs would chase upstream releases and
//!     block passthrough of options we do not model. The handful of fragments we
//!     do own (titles, zoom, axis type) get constructors. The least-squares solve
//!     for trend overlays uses nalgebra's SVD rather than a hand-rolled normal
//!     equation, which stays robust for epoch-millisecond x axes.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs              # mounts the subdirectory modules
//!     ├── builders/           # per-kind builder behavior
//!     └── page/               # document assembly invariants
//!
//!     Note that rust does not by default discover tests in subdirectories, so we
//!     need to include these in the mod. Small deterministic outputs are pinned
//!     with insta inline snapshots; the emitted JSON is deterministic because
//!     serde_json keeps object keys sorted.

pub mod builders;
pub mod chart;
pub mod error;
pub mod frame;
pub mod options;
pub mod page;
pub mod regression;
pub mod scripts;
pub mod series;

pub use builders::{BuildParams, BuilderRegistry, ChartBuilder, ScatterPair};
pub use chart::{Chart, ChartFamily};
pub use error::ChartError;
pub use frame::{Frame, Index};
pub use page::Page;
pub use scripts::ScriptSources;
pub use series::{Point, PointX, Regression, Series, SeriesKind};
