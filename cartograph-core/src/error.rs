//! Error types for the Cartograph core library.
//!
//! Defines error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while indexing roads by their endpoints.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A road named an empty endpoint and cannot be attached to a location.
    #[error("road {id} has an empty endpoint name")]
    EmptyEndpoint {
        /// Identifier of the offending road.
        id: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A road named an empty endpoint.
        EmptyEndpoint => EmptyEndpoint { .. } => "GRAPH_EMPTY_ENDPOINT",
    }
}

/// Which end of a route query failed to resolve.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QueryEndpoint {
    /// The location the route departs from.
    Start,
    /// The location the route must reach.
    End,
}

impl QueryEndpoint {
    /// Returns a lowercase label suitable for logs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for QueryEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced by the shortest route search.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RouteError {
    /// The requested start or end location is not part of the road index.
    #[error("{endpoint} location `{vertex}` does not appear in the road map")]
    UnknownVertex {
        /// The missing location name.
        vertex: Arc<str>,
        /// Whether the start or the end of the query was missing.
        endpoint: QueryEndpoint,
    },
}

define_error_codes! {
    /// Stable codes describing [`RouteError`] variants.
    enum RouteErrorCode for RouteError {
        /// The requested start or end location is not part of the road index.
        UnknownVertex => UnknownVertex { .. } => "ROUTE_UNKNOWN_VERTEX",
    }
}

/// A ratio in the map analysis that cannot be computed.
///
/// These conditions are reported alongside the analysis rather than aborting
/// a run.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum AnalysisError {
    /// The original map has zero total length.
    #[error("original map has zero total length")]
    EmptyOriginalMap,
    /// The route on the original map has zero length.
    #[error("original route has zero length")]
    ZeroLengthRoute,
    /// No route connects the query locations.
    #[error("no route connects the query locations")]
    Unreachable,
}

define_error_codes! {
    /// Stable codes describing [`AnalysisError`] variants.
    enum AnalysisErrorCode for AnalysisError {
        /// The original map has zero total length.
        EmptyOriginalMap => EmptyOriginalMap => "ANALYSIS_EMPTY_ORIGINAL_MAP",
        /// The route on the original map has zero length.
        ZeroLengthRoute => ZeroLengthRoute => "ANALYSIS_ZERO_LENGTH_ROUTE",
        /// No route connects the query locations.
        Unreachable => Unreachable => "ANALYSIS_UNREACHABLE",
    }
}

/// Error type produced when running the network planning pipeline.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CartographError {
    /// Building a road index failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Resolving a route query failed.
    #[error(transparent)]
    Route(#[from] RouteError),
}

define_error_codes! {
    /// Stable codes describing [`CartographError`] variants.
    enum CartographErrorCode for CartographError {
        /// Building a road index failed.
        Graph => Graph { .. } => "CARTOGRAPH_GRAPH_FAILURE",
        /// Resolving a route query failed.
        Route => Route { .. } => "CARTOGRAPH_ROUTE_FAILURE",
    }
}

impl CartographError {
    /// Retrieve the stable code of the wrapped stage error.
    #[must_use]
    pub const fn detail_code(&self) -> &'static str {
        match self {
            Self::Graph(error) => error.code().as_str(),
            Self::Route(error) => error.code().as_str(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, CartographError>;
