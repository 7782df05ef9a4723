// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controllability {
    Controllable,
    NonControllable,
}

/// One non-discretionary match. `item: None` matches on category alone;
/// `item: Some(..)` requires both labels.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: &'static str,
    pub item: Option<&'static str>,
}

/// Fixed rule list, evaluated in order, first match wins. Matching is
/// against trimmed, lowercased labels.
pub const NON_DISCRETIONARY: &[Rule] = &[
    Rule { category: "emi", item: None },
    Rule { category: "emis", item: None },
    Rule { category: "investment", item: None },
    Rule { category: "investments", item: None },
    Rule { category: "home", item: Some("home") },
];

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

pub fn classify(tx: &Transaction) -> Controllability {
    let category = normalize(&tx.category);
    let item = normalize(&tx.item);
    for rule in NON_DISCRETIONARY {
        if rule.category != category {
            continue;
        }
        match rule.item {
            None => return Controllability::NonControllable,
            Some(required) if required == item => return Controllability::NonControllable,
            Some(_) => {}
        }
    }
    Controllability::Controllable
}
