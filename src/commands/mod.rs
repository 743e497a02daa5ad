pub mod explorer_commands;
