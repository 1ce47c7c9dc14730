/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-independent plumbing between generated operations and whatever sends them.

pub mod operation;
pub mod response;
pub mod result;
