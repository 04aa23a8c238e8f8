use crate::metaheuristic::aco;
use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::{Message, MessageInfo};

use csv::Writer;
use serde::Serialize;
use std::io::{stderr, Stderr, Write};
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

/// A single csv row, covering aggregation_rate iterations.
#[derive(Debug, Serialize)]
struct Record {
    iteration: usize,
    evaluations: usize,
    n_improvements: usize,
    changes: usize,
    cpu_time_micros: u64,
    mean_cost: Option<f64>,
    best_cost: Option<f64>,
}

impl Record {
    fn new(iteration: usize, info: &MessageInfo) -> Self {
        Record {
            iteration,
            evaluations: info.evaluations,
            n_improvements: info.n_improvements,
            changes: info.changes,
            cpu_time_micros: info.cpu_time.as_micros() as u64,
            mean_cost: info.mean_distance(),
            best_cost: info.best_distance,
        }
    }
}

/// Collects the messages of all ants and the colony itself
/// and aggregates them per aggregation_rate iterations.
pub struct Supervisor<W: Write> {
    sender: Sender<aco::Message>,
    receiver: Receiver<aco::Message>,
    ants: usize,
    messages: Vec<MessageInfo>,
    aggregation_rate: usize,
    writer: Writer<W>,
}

impl<W: Write> Supervisor<W> {
    pub fn new(aggregation_rate: usize, writer: Writer<W>) -> Self {
        let (tx, rx) = mpsc::channel();
        Supervisor {
            sender: tx,
            receiver: rx,
            ants: 0,
            messages: Vec::default(),
            aggregation_rate: aggregation_rate.max(1),
            writer,
        }
    }

    /// Registers a new ant. Ant ids start at 1, since 0 is the colony itself.
    pub fn new_ant(&mut self) -> (Sender<aco::Message>, usize) {
        self.ants += 1;
        let id = self.ants;

        (self.sender.clone(), id)
    }

    pub fn sender(&self) -> Sender<aco::Message> {
        self.sender.clone()
    }

    pub fn ant_count(&self) -> usize {
        self.ants
    }

    /// The aggregated infos so far, one entry per aggregation_rate iterations.
    pub fn records(&self) -> &[MessageInfo] {
        &self.messages
    }

    /// Writes all aggregated records to the underlying csv writer.
    pub fn write_records(&mut self) {
        for (i, info) in self.messages.iter().enumerate() {
            let record = Record::new(i * self.aggregation_rate, info);
            if let Err(err) = self.writer.serialize(record) {
                eprintln!("{:?}", err);
            }
        }

        if let Err(err) = self.writer.flush() {
            eprintln!("{:?}", err);
        }
    }

    /// Returns the underlying writer, or None if flushing it failed.
    pub fn into_writer(self) -> Option<W> {
        self.writer.into_inner().ok()
    }
}

impl<W: Write> supervisor::Supervisor<aco::Message> for Supervisor<W> {
    fn aggregate_receive(&mut self) {
        while let Ok(message) = self.receiver.try_recv() {
            let idx = message.iteration() / self.aggregation_rate;
            if idx >= self.messages.len() {
                self.messages.resize_with(idx + 1, Default::default);
            }
            self.messages[idx] += message.get_info();
        }
    }
}

impl Default for Supervisor<Stderr> {
    fn default() -> Self {
        Supervisor::new(1, Writer::from_writer(stderr()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metaheuristic::aco::message::{CONSTRUCTION_PHASE, UPDATE_PHASE};
    use crate::metaheuristic::supervisor::Supervisor as _;
    use std::time::Duration;

    fn ant_message(ant_id: usize, iteration: usize, cost: f64) -> aco::Message {
        aco::Message::new(
            ant_id,
            iteration,
            4,
            1,
            3,
            CONSTRUCTION_PHASE,
            Duration::from_micros(10),
            Some(cost),
        )
    }

    #[test]
    fn new_ant_counts_up() {
        let mut supervisor = Supervisor::new(1, Writer::from_writer(vec![]));
        let (_, first) = supervisor.new_ant();
        let (_, second) = supervisor.new_ant();

        assert_eq!((first, second), (1, 2));
        assert_eq!(supervisor.ant_count(), 2);
    }

    #[test]
    fn aggregate_receive_groups_by_rate() {
        let mut supervisor = Supervisor::new(2, Writer::from_writer(vec![]));
        let (sender, id) = supervisor.new_ant();
        for iteration in 0..5 {
            sender
                .send(ant_message(id, iteration, 10.0 - iteration as f64))
                .unwrap();
        }
        supervisor.aggregate_receive();

        let records = supervisor.records();
        assert_eq!(records.len(), 3, "Five iterations at rate two fill three rows.");
        assert_eq!(records[0].evaluations, 8);
        assert_eq!(records[0].best_distance, Some(9.0));
        assert_eq!(records[0].mean_distance(), Some(9.5));
        assert_eq!(records[2].tours, 1);
    }

    #[test]
    fn colony_messages_do_not_count_as_tours() {
        let mut supervisor = Supervisor::new(1, Writer::from_writer(vec![]));
        let sender = supervisor.sender();
        sender
            .send(aco::Message::new(
                0,
                0,
                0,
                1,
                6,
                UPDATE_PHASE,
                Duration::from_micros(3),
                None,
            ))
            .unwrap();
        supervisor.aggregate_receive();

        assert_eq!(supervisor.records()[0].tours, 0);
        assert_eq!(supervisor.records()[0].changes, 6);
    }

    #[test]
    fn write_records_writes_csv() {
        let mut supervisor = Supervisor::new(1, Writer::from_writer(vec![]));
        let (sender, id) = supervisor.new_ant();
        sender.send(ant_message(id, 0, 12.0)).unwrap();
        sender.send(ant_message(id, 1, 8.0)).unwrap();
        supervisor.aggregate_receive();
        supervisor.write_records();

        let out = String::from_utf8(supervisor.into_writer().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "iteration,evaluations,n_improvements,changes,cpu_time_micros,mean_cost,best_cost"
        );
        assert_eq!(lines[1], "0,4,1,3,10,12.0,12.0");
        assert_eq!(lines[2], "1,4,1,3,10,8.0,8.0");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn zero_rate_is_treated_as_one() {
        let mut supervisor = Supervisor::new(0, Writer::from_writer(vec![]));
        let (sender, id) = supervisor.new_ant();
        sender.send(ant_message(id, 3, 1.0)).unwrap();
        supervisor.aggregate_receive();

        assert_eq!(supervisor.records().len(), 4);
    }
}
