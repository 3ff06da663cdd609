//! Cartograph core library.
//!
//! Computes the fastest route between two locations of a road map, reduces
//! the map to a "barely connected" minimum spanning forest, routes again on
//! the reduced map and compares the two.
//!
//! # Determinism
//!
//! Both algorithms break ties by road id. The spanning forest considers roads
//! in ascending `(length, id)` order; the route search settles frontier
//! candidates in ascending `(distance, road id)` order. Identical inputs
//! therefore always produce identical output.

mod analysis;
mod components;
mod error;
mod forest;
mod graph;
mod pipeline;
mod road;
mod route;

#[cfg(test)]
mod property;

pub use crate::{
    analysis::{MapAnalysis, Ratio},
    components::{ComponentTracker, GroupId},
    error::{
        AnalysisError, AnalysisErrorCode, CartographError, CartographErrorCode, GraphError,
        GraphErrorCode, QueryEndpoint, Result, RouteError, RouteErrorCode,
    },
    forest::{SpanningForest, build_spanning_forest},
    graph::RoadIndex,
    pipeline::{NetworkReport, plan_network},
    road::{Road, RouteQuery, total_length},
    route::{Route, find_route},
};
