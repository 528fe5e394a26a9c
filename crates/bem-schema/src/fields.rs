//! Named field indices, one module per object type.
//!
//! Callers address fields through these constants rather than bare integer
//! literals so schema evolution stays source-compatible. Constants inside a
//! `group` submodule index into one extensible repetition.

pub mod building {
    pub const NAME: usize = 0;
    pub const NORTH_AXIS: usize = 1;
    pub const TERRAIN: usize = 2;
}

pub mod zone {
    pub const NAME: usize = 0;
    pub const MULTIPLIER: usize = 1;
    pub const CEILING_HEIGHT: usize = 2;
    pub const VOLUME: usize = 3;
}

pub mod zone_list {
    pub const NAME: usize = 0;

    pub mod group {
        pub const ZONE_NAME: usize = 0;
    }
}

pub mod run_period {
    pub const NAME: usize = 0;
    pub const BEGIN_MONTH: usize = 1;
    pub const BEGIN_DAY: usize = 2;
    pub const END_MONTH: usize = 3;
    pub const END_DAY: usize = 4;
}

pub mod schedule_compact {
    pub const NAME: usize = 0;

    pub mod group {
        pub const FIELD_VALUE: usize = 0;
    }
}

pub mod material {
    pub const NAME: usize = 0;
    pub const ROUGHNESS: usize = 1;
    pub const THICKNESS: usize = 2;
    pub const CONDUCTIVITY: usize = 3;
}

pub mod construction {
    pub const NAME: usize = 0;

    pub mod group {
        pub const LAYER_MATERIAL_NAME: usize = 0;
    }
}

pub mod lights {
    pub const NAME: usize = 0;
    pub const ZONE_NAME: usize = 1;
    pub const SCHEDULE_NAME: usize = 2;
    pub const DESIGN_LEVEL: usize = 3;
    pub const MULTIPLIER: usize = 4;
    pub const FRACTION_RADIANT: usize = 5;
}

pub mod electric_equipment {
    pub const NAME: usize = 0;
    pub const ZONE_NAME: usize = 1;
    pub const SCHEDULE_NAME: usize = 2;
    pub const DESIGN_LEVEL: usize = 3;
    pub const MULTIPLIER: usize = 4;
    pub const FRACTION_LATENT: usize = 5;
    pub const FRACTION_LOST: usize = 6;
}

pub mod equipment_list {
    pub const NAME: usize = 0;
    pub const LOAD_DISTRIBUTION_SCHEME: usize = 1;

    pub mod group {
        pub const EQUIPMENT_NAME: usize = 0;
        pub const COOLING_SEQUENCE: usize = 1;
        pub const HEATING_SEQUENCE: usize = 2;
    }
}
