use quadphys_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(20.0, 20.0).unwrap();
    world.enable_perf_metrics(true);
    for i in 0..300 {
        let x = (i % 20) as f32 * 0.9 - 8.5;
        let y = (i / 20) as f32 * 1.1 - 8.0;
        let vx = if i % 2 == 0 { 1.5 } else { -1.5 };
        world.add_dynamic_body(x, y, vx, 0.5, 1.0, 0.3).unwrap();
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 300);
    assert!(stats.index_nodes() > 1);
    assert_eq!(world.body_state().len(), 300 * 6);
    assert_eq!(world.index_bounds().len() as u32, stats.index_nodes() * 5);
}
