// Bewegung der Metaballs und die Bevy-Anbindung der Simulation
pub mod sim;
