mod persistence;
mod switching;
