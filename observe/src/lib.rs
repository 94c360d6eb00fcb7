/*!
Subject/observer core of the motif pattern catalogue: a weather station that
fans each reading out synchronously to an ordered set of decoupled observers.

# Design notes:
- The station knows observers only through the [`Observer`] capability, one
  `update` method. Registration order is delivery order.
- The registry is non-owning. It holds `Weak` handles, so observer lifetime
  stays with whoever created the observer; handles dropped without
  deregistering are pruned during fan-out.
- Delivery is synchronous on the caller's thread. Fan-outs are serialized by
  the station, and an observer that fails is logged and skipped rather than
  allowed to stop the fan-out.
- Output-producing observers take their sink by injection, so the same type
  serves demos (stdout) and tests (a buffer).

# Registering hand-written observers

```
use std::sync::Arc;
use motif_observe::{ConditionsDisplay, Observer, WeatherStation};

let station = WeatherStation::new();
let display: Arc<dyn Observer> = Arc::new(ConditionsDisplay::new(std::io::stdout()));

station.register(&display);
station.set_measurements(25.0, 65.0);
station.deregister(&display);
station.set_measurements(26.5, 70.0); // no longer delivered to `display`
```

# Subscribing closures and channels

```
use motif_observe::{Measurement, WeatherStation};

let station = WeatherStation::new();
let subscription = station.subscribe(|reading: Measurement| {
    println!("reading arrived: {reading}");
});

station.set_measurements(25.0, 65.0);
drop(subscription); // deregisters
```
*/

mod display;
mod error;
mod measurement;
mod observer;
mod registry;
mod station;
mod subscription;

pub use display::*;
pub use error::*;
pub use measurement::*;
pub use observer::*;
pub use registry::*;
pub use station::*;
pub use subscription::*;
