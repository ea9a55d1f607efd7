//! Engines and proxies across threads

use std::thread;

use glam::DVec3;
use hinge_feature::catalog::{StepInput, TimeStep};
use hinge_tpe::TpeConfig;

use crate::scene;

#[test]
fn independent_engines_run_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|index| {
            thread::spawn(move || {
                let engine = hinge_tpe::load(TpeConfig::default(), index).unwrap();
                let world = engine.construct_empty_world("world").unwrap();
                for n in 0..10 {
                    world.construct_empty_model(&format!("m{n}")).unwrap();
                }
                (engine.index(), world.model_count())
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), (index, 10));
    }
}

#[test]
fn proxies_of_one_engine_serialize_their_calls() {
    let (_engine, world, model, _link) = scene();
    model.set_linear_velocity(DVec3::X).unwrap();

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let world = world.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    let mut input = StepInput::new().with(TimeStep(0.01));
                    world.step(&mut input).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let x = model.pose().unwrap().translation.x;
    assert!((x - 1.0).abs() < 1e-9);
}
