//! Run orchestration: generators in dependency order, then artifacts.

use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use clinicseed_model::schema;

use crate::errors::SeedError;
use crate::generators;
use crate::model::{CollectionReport, SeedOptions, SeedReport};
use crate::output::{write_collection_json, write_report};
use crate::store::MemoryStore;
use crate::streets::StreetBook;

/// Result of a seeding run: the artifact directory, the summary report,
/// and the populated store.
#[derive(Debug)]
pub struct SeedRun {
    pub run_dir: PathBuf,
    pub report: SeedReport,
    pub store: MemoryStore,
}

/// Entry point for seeding the clinic collections.
#[derive(Debug, Clone)]
pub struct SeedEngine {
    options: SeedOptions,
}

impl SeedEngine {
    pub fn new(options: SeedOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<SeedRun, SeedError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
        let run_dir = self
            .options
            .out_dir
            .join(format!("{timestamp}__seed_{run_id}"));
        std::fs::create_dir_all(&run_dir)?;

        let streets = StreetBook::load(&self.options.streets_path)?;
        let counts = &self.options.counts;

        info!(
            run_id = %run_id,
            seed = self.options.seed,
            today = %self.options.today,
            streets = streets.len(),
            "seeding started"
        );

        let mut store = MemoryStore::new(self.options.today);
        let mut rng = ChaCha8Rng::seed_from_u64(self.options.seed);

        // Dependency order: downstream generators resolve foreign keys
        // against the collections seeded before them.
        let outcome = (|| -> Result<(), SeedError> {
            generators::generate_usergroups(&mut store)?;
            seeded(&store, schema::USERGROUPS);

            generators::generate_staff(&mut store, &streets, counts.staff, &mut rng)?;
            seeded(&store, schema::STAFF);

            generators::generate_visitors_patients(
                &mut store,
                &streets,
                counts.visitor_draws,
                &mut rng,
            )?;
            seeded(&store, schema::VISITORS);
            seeded(&store, schema::PATIENTS);

            generators::generate_tips(&mut store, counts.tips, &mut rng)?;
            seeded(&store, schema::TIPS);

            generators::generate_home_remedies(&mut store, counts.home_remedies, &mut rng)?;
            seeded(&store, schema::HOME_REMEDIES);

            generators::generate_facilities(&mut store, counts.facilities, &mut rng)?;
            seeded(&store, schema::FACILITIES);

            generators::generate_events(&mut store, counts.events, &mut rng)?;
            seeded(&store, schema::EVENTS);

            generators::generate_appointments(
                &mut store,
                &streets,
                counts.appointments,
                &mut rng,
            )?;
            seeded(&store, schema::APPOINTMENTS);

            generators::generate_timetable(&mut store, counts.timetable_rounds, &mut rng)?;
            seeded(&store, schema::IS_APPOINTED);

            generators::generate_leave_applies(&mut store, counts.leave_applies, &mut rng)?;
            seeded(&store, schema::LEAVE_APPLY);

            Ok(())
        })();

        if let Err(err) = outcome {
            warn!(run_id = %run_id, error = %err, "seeding failed");
            return Err(err);
        }

        let names: Vec<&'static str> = store.collection_names().collect();
        let mut bytes_written = 0_u64;
        let mut collections = Vec::with_capacity(names.len());
        for name in names {
            let path = run_dir.join(format!("{name}.json"));
            bytes_written += write_collection_json(&path, store.docs(name))?;
            collections.push(CollectionReport {
                name: name.to_string(),
                documents: store.len(name) as u64,
            });
        }

        let report = SeedReport {
            run_id: run_id.clone(),
            seed: self.options.seed,
            today: self.options.today.format("%Y-%m-%d").to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
            bytes_written,
            collections,
        };
        write_report(&run_dir.join("seed_report.json"), &report)?;

        info!(
            run_id = %run_id,
            collections = report.collections.len(),
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "seeding completed"
        );

        Ok(SeedRun {
            run_dir,
            report,
            store,
        })
    }
}

fn seeded(store: &MemoryStore, collection: &str) {
    info!(
        collection,
        documents = store.len(collection),
        "collection seeded"
    );
}
