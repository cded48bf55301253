use clap::ValueEnum;

/// Product categories the listing can be fetched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    /// creatine
    #[value(name = "c")]
    Creatine,
    /// protein powder
    #[value(name = "p")]
    ProteinPowder,
    /// pre-workout
    #[value(name = "w")]
    PreWorkout,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Creatine,
        Category::ProteinPowder,
        Category::PreWorkout,
    ];

    /// Catalog path on the storefront, relative to the site root.
    pub fn path(self) -> &'static str {
        match self {
            Category::Creatine => "muscle-builders/creatine/",
            Category::ProteinPowder => "protein/protein-powder/",
            Category::PreWorkout => "performance/pre-workout-supplements/",
        }
    }

    /// Last segment of the catalog path, used to name the output file.
    pub fn slug(self) -> &'static str {
        self.path()
            .split('/')
            .nth(1)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_second_path_segment() {
        assert_eq!(Category::Creatine.slug(), "creatine");
        assert_eq!(Category::ProteinPowder.slug(), "protein-powder");
        assert_eq!(Category::PreWorkout.slug(), "pre-workout-supplements");
    }
}
