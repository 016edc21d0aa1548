//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: screen title and, on the detail screen, the back control
//! - `CarImage`: a bundled drawing, centered and cropped to its area
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! The state struct lives in `TuiState`; the wrapper is built each frame
//! with borrowed state and props:
//! - `CarList` / `CarListState`: the card list, its scroll offset and
//!   hit-test cache
//! - `CarDetail` / `CarDetailState`: the scrollable pros/cons body
//!
//! ### Props-Based Data Flow
//!
//! Components receive the data they draw as props rather than reaching into
//! `App`, which keeps them testable against a `TestBackend`:
//!
//! ```rust,ignore
//! CarList::new(&mut tui.car_list, catalog::list_car_types(), app.selected, &tui.theme)
//!     .render(frame, body_area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top bar + back control)
//! ├── car_image.rs     (ASCII-art image)
//! ├── car_list.rs      (list screen)
//! └── car_detail.rs    (detail screen)
//! ```

pub mod car_detail;
pub mod car_image;
pub mod car_list;
pub mod title_bar;

pub use car_detail::{CarDetail, CarDetailState};
pub use car_image::CarImage;
pub use car_list::{CarList, CarListState};
pub use title_bar::TitleBar;
