// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use pake_ecc::{available_curves, Pake, Role};

fn initiator_setup(c: &mut Criterion) {
    for curve in available_curves() {
        c.bench_function(&format!("initiator setup ({curve})"), move |bench| {
            bench.iter(|| Pake::new(b"password", Role::Initiator, curve).unwrap())
        });
    }
}

fn full_exchange(c: &mut Criterion) {
    for curve in available_curves() {
        c.bench_function(&format!("full exchange ({curve})"), move |bench| {
            bench.iter(|| {
                let mut initiator = Pake::new(b"password", Role::Initiator, curve).unwrap();
                let mut responder = Pake::new(b"password", Role::Responder, curve).unwrap();
                responder.update(&initiator.to_bytes()).unwrap();
                initiator.update(&responder.to_bytes()).unwrap();
                initiator.session_key().unwrap()
            })
        });
    }
}

fn responder_update(c: &mut Criterion) {
    for curve in available_curves() {
        let initiator = Pake::new(b"password", Role::Initiator, curve).unwrap();
        let message_one = initiator.to_bytes();
        c.bench_function(&format!("responder update ({curve})"), move |bench| {
            bench.iter(|| {
                let mut responder = Pake::new(b"password", Role::Responder, curve).unwrap();
                responder.update(&message_one).unwrap();
            })
        });
    }
}

criterion_group!(
    pake_benches,
    initiator_setup,
    full_exchange,
    responder_update
);
criterion_main!(pake_benches);
