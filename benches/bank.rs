use classroom_oop::{AccountKind, Amount, Bank, Operation, Program};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Generates valid operation sequences for benchmarking.
///
/// Every owner first opens an account (alternating savings and current),
/// then repeats: deposit 100, deposit 50, withdraw 30.
pub struct OpGenerator {
    num_owners: u32,
    ops_per_owner: u32,
    current_owner: u32,
    current_step: u32,
}

impl OpGenerator {
    pub fn new(num_owners: u32, ops_per_owner: u32) -> Self {
        Self {
            num_owners,
            ops_per_owner,
            current_owner: 0,
            current_step: 0,
        }
    }
}

impl Iterator for OpGenerator {
    type Item = Operation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_owner >= self.num_owners {
            return None;
        }

        let owner = format!("owner-{}", self.current_owner);
        let op = if self.current_step == 0 {
            let kind = if self.current_owner % 2 == 0 {
                AccountKind::Savings
            } else {
                AccountKind::Current
            };
            Operation::Open {
                owner,
                kind,
                amount: Amount::ZERO,
            }
        } else {
            match self.current_step % 3 {
                1 => Operation::Deposit {
                    owner,
                    amount: Amount::from_taka(100),
                },
                2 => Operation::Deposit {
                    owner,
                    amount: Amount::from_taka(50),
                },
                _ => Operation::Withdraw {
                    owner,
                    amount: Amount::from_taka(30),
                },
            }
        };

        self.current_step += 1;
        if self.current_step >= self.ops_per_owner {
            self.current_step = 0;
            self.current_owner += 1;
        }

        Some(op)
    }
}

fn bench_bank_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank");

    for (owners, ops_per) in [(100, 1_000), (1_000, 100), (10, 10_000)] {
        let label = format!("{owners}o_{ops_per}ops");
        group.bench_with_input(
            BenchmarkId::from_parameter(&label),
            &(owners, ops_per),
            |b, &(owners, ops_per)| {
                b.iter(|| {
                    let mut bank = Bank::new();
                    for op in OpGenerator::new(owners, ops_per) {
                        let _ = black_box(bank.apply(op));
                    }
                    bank
                });
            },
        );
    }

    group.finish();
}

fn bench_task_reviews(c: &mut Criterion) {
    let mut group = c.benchmark_group("internship");

    for tasks in [10u32, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(tasks), &tasks, |b, &tasks| {
            b.iter(|| {
                let mut program = Program::new();
                let mentor = program.register_mentor(1, "mentor", "m@example.com");
                let student = program.register_student(2, "student", "s@example.com");
                for id in 0..tasks {
                    let task = program.assign_task(mentor, student, id, "task").unwrap();
                    program.submit(student, task).unwrap();
                    black_box(program.review(mentor, task, "ok").unwrap());
                }
                program
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bank_operations, bench_task_reviews);
criterion_main!(benches);
