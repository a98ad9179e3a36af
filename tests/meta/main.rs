//! Structural checks keeping the mirrored unit test tree in step with the sources

mod coverage;
