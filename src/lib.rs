//! A general-purpose collection toolkit, built from scratch on top of the raw allocator.
//!
//! # Purpose
//! This crate collects the container types I keep rewriting for other projects into one place:
//! a runtime-sized [`Array`](collections::contiguous::Array) and growable
//! [`Vector`](collections::contiguous::Vector), singly and doubly linked lists, a
//! separate-chaining [`HashMap`](collections::hash::HashMap) and
//! [`HashSet`](collections::hash::HashSet), [`Stack`](collections::Stack) and
//! [`Queue`](collections::Queue) wrappers, and a UTF-8 [`Text`](collections::text::Text) string.
//! All of them share one polymorphic traversal protocol, [`Traverse`](traverse::Traverse), with
//! composable adapters (filter/map/take/skip/enumerate) that work over any conforming traverser.
//!
//! # Method
//! The data structures are written against the allocator directly rather than layered over [`Vec`]
//! or the standard collections. In fact, this library doesn't use [`Vec`] at all: contiguous
//! storage goes through [`Array`](collections::contiguous::Array), and the hash map's bucket table
//! and entry chains own their memory through that same machinery plus [`Box`] links. This isn't a
//! copy of [`std`]'s collections, but it borrows a lot of API shape from them on purpose.
//!
//! # Error Handling
//! Not-found outcomes are [`Option`]s, never errors. Where an operation can genuinely fail
//! (out-of-bounds access, capacity overflow) there is a strongly typed `try_` variant returning a
//! [`Result`] with a dedicated error type, alongside an ergonomic panicking variant for the common
//! case. Error enums use static dispatch via derive macros instead of boxed `dyn Error`.
//!
//! # Concurrency
//! Every structure here is single-threaded by design: no internal locking, no atomics. Callers
//! that need shared access wrap a collection in the usual [`std::sync`] types; nothing in this
//! crate blocks, suspends, or performs I/O.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod traverse;

pub(crate) mod util;
