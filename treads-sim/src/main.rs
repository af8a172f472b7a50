use treads_core::GLOBAL_CONFIG;

mod simulation;

fn main() {
    // kick off the simulation loop
    let mut server = simulation::SimServer::new(GLOBAL_CONFIG.tank_amount);
    server.start_loop();
}
