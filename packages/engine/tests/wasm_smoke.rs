#![cfg(target_arch = "wasm32")]

use quadphys_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn world_steps_and_exports_state() {
    let mut world = World::new(20.0, 20.0).unwrap();
    let a = world.add_dynamic_body(-0.4, 0.0, 1.0, 0.0, 1.0, 0.5).unwrap();
    world.add_dynamic_body(0.4, 0.0, -1.0, 0.0, 1.0, 0.5).unwrap();
    world.add_static_body(5.0, 5.0, 1.0, 1.0).unwrap();

    assert_eq!(world.step(), 1);
    let state = world.body_state();
    assert_eq!(state.len(), 3 * 6);
    assert!(state[2] < 0.0);
    assert_eq!(state[17], 1.0);

    assert!(world.remove_body(a));
    assert_eq!(world.body_count(), 2);
}

#[wasm_bindgen_test]
fn invalid_input_is_reported() {
    let mut world = World::new(20.0, 20.0).unwrap();
    assert!(world.add_dynamic_body(0.0, 0.0, 0.0, 0.0, -1.0, 0.5).is_err());
    assert!(world.set_pair_order("sideways").is_err());
    assert!(World::new(-5.0, 20.0).is_err());
}
