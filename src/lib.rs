//! Tracking of the display layout of `lwm` through the X11 `randr` extension
//!
//! Monitors are connected, disconnected, moved and rotated at runtime. The
//! server reports each of these as `RRNotify` events, which are turned into
//! changes of the [`Screens`](screen::Screens) the window manager lays its
//! frames out on

#![deny(
    clippy::all,
    clippy::complexity,
    clippy::correctness,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    absolute_paths_not_starting_with_crate,
    anonymous_parameters,
    bad_style,
    ellipsis_inclusive_range_patterns,
    exported_private_dependencies,
    ill_formed_attribute_input,
    improper_ctypes,
    keyword_idents,
    macro_use_extern_crate,
    meta_variable_misuse,
    missing_abi,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    noop_method_call,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    semicolon_in_expressions_from_macros,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    while_true
)]
#![allow(
    clippy::redundant_pub_crate,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::cast_possible_wrap,
    clippy::module_name_repetitions,
    clippy::missing_const_for_fn
)]
#![cfg_attr(
    any(test),
    allow(
        clippy::expect_used,
        clippy::panic,
        clippy::unwrap_used,
        clippy::wildcard_enum_match_arm,
    )
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hooks;
pub mod macros;
pub mod randr;
pub mod screen;
pub mod types;
pub mod utils;
pub mod x;
