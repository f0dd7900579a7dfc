//! Entry point: run the configured pipeline and hand the result to a surface.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{GenerationConfig, Strategy};
use crate::corridor_first::corridor_first_generate;
use crate::error::{GenerationWarning, LayoutError};
use crate::graph_layout::graph_generate;
use crate::layout::Layout;
use crate::room_first::room_first_generate;
use crate::separation::{RoomPlacementService, SteeringSeparation};
use crate::surface::TileSurface;

/// What a single run did to the surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Generated { floor_cells: usize, rooms: usize },
    /// Nothing was painted and the previous layout was kept.
    Skipped(GenerationWarning),
}

impl Outcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Outcome::Generated { .. })
    }
}

/// Owns the configuration, the random stream and the last finished layout.
///
/// The stream is seeded once from `config.seed` and keeps advancing, so
/// successive runs of one generator differ while two generators built from the
/// same config produce the same sequence of layouts.
#[derive(Clone, Debug)]
pub struct Generator {
    config: GenerationConfig,
    rng: ChaCha8Rng,
    layout: Option<Layout>,
}

impl Generator {
    pub fn new(config: GenerationConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            rng,
            layout: None,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Layout of the last successful run, if not cleared since.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Runs the pipeline to completion, then clears and repaints `surface`.
    ///
    /// The surface is only touched once the layout is final: dropping the
    /// future early or a skipped run leaves it as it was.
    pub async fn generate_with(
        &mut self,
        surface: &mut impl TileSurface,
        placement: &mut impl RoomPlacementService,
    ) -> Outcome {
        let result = match &self.config.strategy {
            Strategy::CorridorFirst(c) => corridor_first_generate(c, &mut self.rng),
            Strategy::RoomFirst(c) => room_first_generate(c, &mut self.rng),
            Strategy::Graph(c) => graph_generate(c, placement, &mut self.rng).await,
        };

        let layout = match result {
            Ok(layout) => layout,
            Err(warning) => {
                log::warn!("generation skipped: {warning}");
                return Outcome::Skipped(warning);
            }
        };

        surface.clear();
        surface.paint_floor(&layout.floor);
        surface.paint_walls(&layout.floor);

        let outcome = Outcome::Generated {
            floor_cells: layout.floor.len(),
            rooms: layout.room_count(),
        };
        log::info!(
            "generated {} floor cells, {} rooms, {} corridors",
            layout.floor.len(),
            layout.room_count(),
            layout.corridor_count
        );
        self.layout = Some(layout);
        outcome
    }

    /// Blocking run using [`SteeringSeparation`] for room placement. Spacing
    /// comes from the graph config, so the service adds no padding of its own.
    pub fn generate(&mut self, surface: &mut impl TileSurface) -> Outcome {
        let mut placement = SteeringSeparation::new(0);
        pollster::block_on(self.generate_with(surface, &mut placement))
    }

    pub fn clear(&mut self, surface: &mut impl TileSurface) {
        surface.clear();
        self.layout = None;
    }
}
