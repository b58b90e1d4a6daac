#![cfg(test)]

mod delete;
mod insert;
mod sticky;
mod truncate;
mod update;
