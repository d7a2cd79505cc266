mod commands;
mod learn;
