use townmap::resources::GenerationSettings;
use townmap::{GenerationParams, TownmapResult};

/// Merges config file defaults with command line overrides
pub struct ParamsBuilder {
    params: GenerationParams,
    seed: Option<u64>,
}

impl ParamsBuilder {
    pub fn new(settings: &GenerationSettings) -> Self {
        Self {
            params: GenerationParams::from(settings),
            seed: None,
        }
    }

    pub fn regions(mut self, regions: Option<u32>) -> Self {
        if let Some(regions) = regions {
            self.params.region_count = regions;
        }
        self
    }

    pub fn places(mut self, places: Option<(u32, u32)>) -> Self {
        if let Some((min, max)) = places {
            self.params.min_places = min;
            self.params.max_places = max;
        }
        self
    }

    pub fn max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        if let Some(max_attempts) = max_attempts {
            self.params.max_attempts = max_attempts;
        }
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validated parameters and the seed to generate with
    pub fn build(self) -> TownmapResult<(GenerationParams, u64)> {
        let seed = self.seed.unwrap_or_else(rand::random);
        Ok((self.params.validated()?, seed))
    }
}
