//! Deterministic synthetic data for structural testing.
//!
//! Produces a plausible placeholder series for every exogenous variable and
//! a historical seed for the endogenous ones, calibrated to approximate UK
//! magnitudes but NOT real data. Seeds are fixed, so two runs always
//! produce the same store.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use sterling_core::SeriesStore;

use crate::config;

/// AR(1) process around `mean`.
fn ar1(n: usize, mean: f64, persistence: f64, vol: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut x = vec![0.0; n];
    x[0] = mean;
    for i in 1..n {
        let z: f64 = rng.sample(StandardNormal);
        x[i] = mean * (1.0 - persistence) + persistence * x[i - 1] + vol * z;
    }
    x
}

/// Geometric Brownian motion at quarterly frequency, starting at `start`.
fn gbm(n: usize, start: f64, drift_q: f64, vol_q: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut log_level = start.ln();
    let mut x = Vec::with_capacity(n);
    x.push(start);
    for _ in 1..n {
        let z: f64 = rng.sample(StandardNormal);
        log_level += drift_q + vol_q * z;
        x.push(log_level.exp());
    }
    x
}

/// Exponential trend `start * (1 + growth)^i`.
fn trend(n: usize, start: f64, growth_q: f64) -> Vec<f64> {
    (0..n).map(|i| start * (1.0 + growth_q).powi(i as i32)).collect()
}

fn scale(values: &[f64], k: f64) -> Vec<f64> {
    values.iter().map(|v| v * k).collect()
}

fn offset(values: &[f64], k: f64) -> Vec<f64> {
    values.iter().map(|v| v + k).collect()
}

fn zip2(a: &[f64], b: &[f64], f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect()
}

/// Builder over the full history+forecast period range.
struct Gen {
    store: SeriesStore,
    n: usize,
    rng: ChaCha8Rng,
}

impl Gen {
    fn new() -> Self {
        let store = SeriesStore::new(config::history_start(), config::forecast_end());
        let n = (config::forecast_end() - config::history_start()) as usize + 1;
        Self {
            store,
            n,
            rng: ChaCha8Rng::seed_from_u64(42),
        }
    }

    fn put(&mut self, name: &str, values: &[f64]) {
        debug_assert_eq!(values.len(), self.n);
        let first = self.store.first_period();
        for (i, value) in values.iter().enumerate() {
            self.store
                .set(first + i as i64, name, *value)
                .expect("period within store range");
        }
    }

    fn col(&self, name: &str) -> Vec<f64> {
        self.store
            .periods()
            .map(|p| self.store.get(p, name).expect("column fully populated"))
            .collect()
    }

    fn constant(&mut self, name: &str, value: f64) {
        let values = vec![value; self.n];
        self.put(name, &values);
    }

    /// Standard normal draws scaled by `vol`, from the shared noise stream.
    fn noise(&mut self, vol: f64) -> Vec<f64> {
        (0..self.n)
            .map(|_| {
                let z: f64 = self.rng.sample(StandardNormal);
                z * vol
            })
            .collect()
    }

    /// Multiplies a path by `(1 + noise)`.
    fn jitter(&mut self, values: &[f64], vol: f64) -> Vec<f64> {
        let noise = self.noise(vol);
        zip2(values, &noise, |v, e| v * (1.0 + e))
    }

    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Generates the full synthetic store covering every model variable from
/// history start through forecast end.
pub fn generate_synthetic_store() -> SeriesStore {
    let mut g = Gen::new();
    let n = g.n;

    // --- Exogenous variables ---

    // Interest rates (percent)
    let r = ar1(n, 4.0, 0.95, 0.3, 1);
    g.put("R", &r);
    let e = g.noise(0.1);
    g.put("RL", &zip2(&r, &e, |r, e| r + 0.8 + e));
    let e = g.noise(0.1);
    g.put("RMORT", &zip2(&r, &e, |r, e| r + 1.8 + e));
    g.put("RDEP", &r.iter().map(|r| (r - 1.2).max(0.1)).collect::<Vec<_>>());
    let e = g.noise(0.05);
    g.put("ROCB", &zip2(&r, &e, |r, e| r + 0.3 + e));
    g.put("ROLT", &offset(&g.col("RL"), 0.2));
    g.put("DISCO", &scale(&r, 1.0 / 100.0));

    // Exchange rates
    let rx = gbm(n, 1.0, 0.0, 0.015, 2);
    g.put("RX", &rx);
    g.put("RXD", &scale(&rx, 0.85));

    // Oil price (USD/barrel)
    g.put("PBRENT", &gbm(n, 20.0, 0.005, 0.06, 3));

    // World variables
    let t = trend(n, 50.0, 0.005);
    let wpg = g.jitter(&t, 0.01);
    g.put("WPG", &wpg);
    let t = trend(n, 200_000.0, 0.006);
    let majgdp = g.jitter(&t, 0.005);
    g.put("MAJGDP", &majgdp);
    let t = trend(n, 50.0, 0.01);
    let weqpr = g.jitter(&t, 0.03);
    g.put("WEQPR", &weqpr);

    // Population (thousands)
    let pop16 = trend(n, 40_000.0, 0.001);
    g.put("POP16", &pop16);
    g.put("POPAL", &scale(&pop16, 1.22));
    g.put("GAD1", &scale(&pop16, 0.18));
    g.put("GAD2", &scale(&pop16, 0.62));
    g.put("GAD3", &scale(&pop16, 0.20));

    // Labour force parameters
    let e = g.noise(0.3);
    g.put("PART16", &offset(&e, 63.0));
    let e = g.noise(0.1);
    g.put("AVH", &offset(&e, 32.0));
    g.put("HH", &trend(n, 22_000.0, 0.0008));

    // Tax rates
    g.constant("TCPRO", 0.25);
    g.constant("TPBRZ", 0.20);
    g.put("NIS", &trend(n, 3000.0, 0.005));

    // Investment parameters
    g.constant("IIB", 0.05);
    g.constant("SIB", 0.04);
    g.constant("FP", 0.03);
    g.constant("SP", 0.05);
    g.constant("SV", 0.03);
    g.constant("DELTA", 0.02);
    g.constant("DEBTW", 0.35);
    g.put("NDIV", &trend(n, 3.0, 0.005));

    // Government/policy (exogenous paths)
    let t = trend(n, 5500.0, 0.002);
    let egg = g.jitter(&t, 0.002);
    g.put("EGG", &egg);
    g.constant("CGWADJ", 1.0);
    g.constant("LAWADJ", 1.0);
    g.put("ERCG", &trend(n, 400.0, 0.005));
    g.put("ERLA", &trend(n, 350.0, 0.005));
    g.constant("ADJW", 1.0);

    // North Sea
    let t = trend(n, 8000.0, -0.01);
    let nsgva: Vec<f64> = g.jitter(&t, 0.02).iter().map(|v| v.max(1000.0)).collect();
    g.put("NSGVA", &nsgva);
    g.put("XOIL", &scale(&nsgva, 1.37));

    // Fiscal exogenous
    g.put("CGGPSPSF", &trend(n, 50_000.0, 0.005));
    g.put("PSCE", &trend(n, 180_000.0, 0.005));
    g.put("PSNI", &trend(n, 15_000.0, 0.005));
    g.put("CGIPS", &trend(n, 5000.0, 0.005));
    g.put("LAIPS", &trend(n, 3000.0, 0.005));

    // Housing
    g.put("LHP", &trend(n, 800_000.0, 0.01));
    g.put("OLPE", &trend(n, 100_000.0, 0.008));
    g.put("STUDENT", &trend(n, 50_000.0, 0.02));
    g.put("HRRPW", &trend(n, 100.0, 0.005));
    g.put("PRP", &trend(n, 200.0, 0.01));

    // Various exogenous fiscal/benefit items
    for name in [
        "VREC", "TXFUEL", "TXTOB", "TXALC", "CUST", "CCL", "AL", "TXCUS", "VEDHH", "BBC",
        "PASSPORT", "OHT", "VEDCO", "NNDRA", "LAPT", "OPT", "EUETS", "CIL", "ENVLEVY",
        "BANKROLL", "RULC", "BLEVY", "SWISSCAP", "BETPRF", "BETLEVY", "OFGEM", "EXDUTAC",
        "XLAVAT", "LAVAT", "TSD", "ROCS", "TXMIS", "RFP", "EUOT", "NPISHTC", "PRT", "CGT",
        "FCACA", "PROV", "TYPCO", "LAEPS", "INHT", "CC", "EENIC", "EMPNIC", "OSPC", "LARENT",
        "PCRENT", "INCTAC", "NICAC", "CGACRES", "ILGAC", "CONACC", "MFTRAN", "LAAC", "LAMFT",
        "PCAC", "PCGILT", "MFTPC", "CGGILTS", "OFLPS", "NATSAV", "MKTIG", "LAGILT", "LCGLA",
        "LCGPC", "CGLIQ", "LALIQ", "PSNDRES", "GGGDRES", "FLEASGG", "FLEASPC", "LCGOS",
        "LCGPR", "CGMISP", "LALEND", "LAMISE", "PCLEND", "PCMISE", "IBPC", "KCGPSO", "KPSCG",
        "KLA", "KGLAPC", "KGLA", "KPCPS", "KPSPC", "ASSETSA", "NPACG", "NPALA", "NPAHH",
        "NPAA", "EUKT", "OPSKTA", "PCCON", "PCIH", "PCLEB", "IPRL", "IPRLPS", "CGSB",
        "LASBHH", "LANCGA", "LAOTRHH", "CGOTR", "DICGOP", "DILAPR", "DIPCOP", "LAPR",
        "LASUBP", "CGSUBPR", "CCLACA", "RCGIM", "RLAIM", "TROD", "CGCGLA", "CGINTRA",
        "LAINTRA", "PCINTRA", "LANNDR", "KCGLA", "KCGPC", "RNCG", "HHTCG", "LANDIV",
        "PCNDIV", "CGNDIV", "IPCPS", "KGLAPC_f", "NSCTP", "NNSCTP", "M4OFC", "COIN", "M0",
        "APIIH", "DIPHH", "DIPHHuf", "DIRHH", "FSMADJ", "OSHH", "SIPT", "INSURE", "ITA_exog",
        "FISIMROW", "FISIMGG", "TRGDP", "SDE", "SDEPS", "SPECX", "ALAD", "CORP", "STLIC",
        "FXLIC", "BLIC", "PRXMIP", "OOH", "HWA", "H16", "MILAPM", "CTC", "TSEOP", "TCINV",
        "XS", "IH",
    ] {
        let start = 500.0 + g.uniform() * 5000.0;
        let t = trend(n, start, 0.005);
        let values = g.jitter(&t, 0.01);
        g.put(name, &values);
    }

    // --- Endogenous variables: historical seed values ---

    // GDP and components (GBP millions, quarterly, constant prices)
    let t = trend(n, 300_000.0, 0.005);
    let gdp = g.jitter(&t, 0.003);
    g.put("GDPM", &gdp);
    g.put("CONS", &scale(&gdp, 0.62));
    g.put("IF", &scale(&gdp, 0.17));
    g.put("CGG", &scale(&gdp, 0.20));
    g.put("X", &scale(&gdp, 0.30));
    g.put("M", &scale(&gdp, 0.31));
    let dinv = g.noise(500.0);
    g.put("DINV", &dinv);
    g.put("VAL", &scale(&gdp, 0.01));
    g.put("SDE", &scale(&gdp, 0.01));
    let tfe: Vec<f64> = ["CGG", "CONS", "DINV", "VAL", "IF", "X"]
        .iter()
        .map(|&name| g.col(name))
        .reduce(|acc, col| zip2(&acc, &col, |a, b| a + b))
        .expect("non-empty component list");
    g.put("TFE", &tfe);
    g.put("GVA", &scale(&gdp, 0.90));
    g.put("BPA", &zip2(&gdp, &g.col("GVA"), |a, b| a - b));
    g.put("GGVA", &scale(&g.col("GVA"), 0.18));
    g.put("MSGVA", &zip2(&g.col("GVA"), &g.col("GGVA"), |a, b| a - b));
    g.put("NNSGVA", &zip2(&g.col("GVA"), &nsgva, |a, b| a - b));

    // Nominal GDP and components
    g.put("PGDP", &trend(n, 60.0, 0.005));
    g.put(
        "GDPMPS",
        &zip2(&gdp, &g.col("PGDP"), |a, p| a * p / 100.0),
    );
    let t = trend(n, 65.0, 0.005);
    g.put("CONSPS", &zip2(&g.col("CONS"), &t, |a, p| a * p / 100.0));
    let t = trend(n, 70.0, 0.005);
    g.put("IFPS", &zip2(&g.col("IF"), &t, |a, p| a * p / 100.0));

    // Price indices (base ~100 around 2019)
    g.put("PCE", &trend(n, 30.0, 0.005));
    let cpi = trend(n, 30.0, 0.005);
    g.put("CPI", &cpi);
    g.put("CPIH", &scale(&cpi, 1.005));
    g.put("CPIX", &scale(&cpi, 0.98));
    g.put("CPIRENT", &trend(n, 28.0, 0.006));
    g.put("PIF", &trend(n, 32.0, 0.005));
    g.put("PIBUS", &trend(n, 33.0, 0.005));
    g.put("PIH", &trend(n, 31.0, 0.006));
    g.put("PINV", &trend(n, 80.0, 0.003));
    let pxnog = trend(n, 35.0, 0.004);
    g.put("PXNOG", &pxnog);
    g.put("PXS", &scale(&pxnog, 1.02));
    g.put("PXOIL", &scale(&g.col("PBRENT"), 0.8));
    let pmnog = trend(n, 34.0, 0.004);
    g.put("PMNOG", &pmnog);
    g.put("PMS", &scale(&pmnog, 1.01));
    g.put("PMOIL", &g.col("PXOIL"));
    g.put("PPIY", &trend(n, 35.0, 0.004));
    g.put("PMSGVA", &trend(n, 60.0, 0.005));
    g.put("PGVA", &trend(n, 62.0, 0.005));
    g.put("PCDUR", &trend(n, 33.0, 0.003));
    g.put("PRENT", &trend(n, 80.0, 0.006));
    g.put("PDINV", &trend(n, 70.0, 0.004));
    g.put("GGFCD", &trend(n, 70.0, 0.005));
    g.put("GGIDEF", &trend(n, 72.0, 0.005));
    g.put("PKMSXHB", &g.col("PIBUS"));

    // Employment (thousands)
    let t = trend(n, 25_000.0, 0.002);
    let et = g.jitter(&t, 0.002);
    g.put("ET", &et);
    g.put("ETLFS", &scale(&et, 1.02));
    g.put("EMS", &scale(&et, 0.78));
    g.put("ECG", &scale(&et, 0.08));
    g.put("ELA", &scale(&et, 0.07));
    g.put("ES", &scale(&et, 0.12));
    g.put("ESLFS", &scale(&g.col("ES"), 1.02));
    let ulfs = zip2(
        &zip2(&pop16, &g.col("PART16"), |p, part| p * part / 100.0),
        &g.col("ETLFS"),
        |lf, e| lf - e,
    );
    g.put("ULFS", &ulfs);
    g.put(
        "LFSUR",
        &zip2(&ulfs, &g.col("ETLFS"), |u, e| 100.0 * u / (e + u)),
    );

    // Hours and productivity
    g.put(
        "HWA",
        &zip2(&g.col("ETLFS"), &g.col("AVH"), |e, h| e * h / 1000.0),
    );
    g.put("APH", &trend(n, 25.0, 0.003));
    g.put("PRODH", &zip2(&gdp, &g.col("HWA"), |a, b| a / b));
    g.put("HD", &g.col("APH"));

    // Wages and income (GBP millions)
    g.put("PSAVEI", &trend(n, 500.0, 0.008));
    let wfp = trend(n, 120_000.0, 0.006);
    g.put("WFP", &wfp);
    g.put("FYEMP", &scale(&wfp, 1.15));
    let earn_denom = zip2(&g.col("ETLFS"), &g.col("ESLFS"), |a, b| a - b);
    g.put("EARN", &zip2(&wfp, &earn_denom, |w, d| w / d));
    let empsc = zip2(&g.col("FYEMP"), &wfp, |f, w| f - w);
    g.put("EMPSC", &empsc);
    g.put("EMPISC", &scale(&empsc, 0.4));
    g.put("HHISC", &scale(&g.col("EMPISC"), 0.6));
    g.put("MI", &trend(n, 15_000.0, 0.005));

    // Income flows
    let hhdi = trend(n, 250_000.0, 0.005);
    g.put("HHDI", &hhdi);
    g.put("RHHDI", &zip2(&hhdi, &g.col("PCE"), |h, p| 100.0 * h / p));

    // Consumption sub-components
    let cdur = scale(&g.col("CONS"), 0.12);
    g.put("CDUR", &cdur);
    g.put(
        "CDURPS",
        &zip2(&cdur, &g.col("PCDUR"), |c, p| c * p / 100.0),
    );
    g.put("PD", &trend(n, 150.0, 0.005));

    // Trade sub-components
    g.put("XNOG", &scale(&g.col("X"), 0.55));
    g.put("XS", &scale(&g.col("X"), 0.35));
    g.put("XPS", &trend(n, 90_000.0, 0.006));
    g.put("MNOG", &scale(&g.col("M"), 0.55));
    g.put("MS", &scale(&g.col("M"), 0.30));
    g.put("MOIL", &scale(&g.col("M"), 0.05));
    g.put("MPS", &trend(n, 95_000.0, 0.006));
    let tdoil = zip2(
        &zip2(&g.col("MOIL"), &nsgva, |m, ns| m + ns),
        &g.col("XOIL"),
        |a, x| a - x,
    );
    g.put("TDOIL", &tdoil);

    // Investment components
    let ibus = scale(&g.col("IF"), 0.55);
    g.put("IBUS", &ibus);
    g.put("IBUSX", &ibus);
    g.put("GGI", &scale(&g.col("IF"), 0.18));
    g.put(
        "GGIPS",
        &zip2(&g.col("CGIPS"), &g.col("LAIPS"), |a, b| a + b),
    );
    g.put("GGIX", &g.col("GGI"));
    g.put("HIMPROV", &trend(n, 10_000.0, 0.005));
    let ih = scale(&g.col("IF"), 0.12);
    g.put("IH", &ih);
    let ihps = zip2(&ih, &g.col("PIH"), |i, p| i * p / 100.0);
    g.put("IHPS", &ihps);
    g.put("IHHPS", &scale(&ihps, 0.9));
    g.put("ICCPS", &trend(n, 30_000.0, 0.005));
    g.put("IFCPS", &trend(n, 10_000.0, 0.005));
    let valps = zip2(&g.col("VAL"), &g.col("PIF"), |v, p| v * p / 100.0);
    g.put("VALPS", &valps);
    g.put("VALHH", &scale(&valps, 0.25));

    // Capital stock
    let kmsxh = trend(n, 1000.0, 0.005);
    g.put("KMSXH", &kmsxh);
    let kstar = scale(&kmsxh, 1000.0);
    g.put("KSTAR", &kstar);
    g.put(
        "KGAP",
        &zip2(&kmsxh, &kstar, |k, ks| (k * 1000.0).ln() - ks.ln()),
    );

    // Cost of capital components
    g.constant("DB", 0.5);
    g.constant("DP", 0.5);
    g.constant("DV", 0.3);
    g.constant("WB", 0.31);
    g.constant("WP", 0.54);
    g.constant("WV", 0.14);
    g.constant("WG", 0.03);
    g.constant("TAFB", 1.0);
    g.constant("TAFP", 1.0);
    g.constant("TAFV", 1.0);
    g.constant("TAF", 1.0);
    g.put("CDEBT", &ar1(n, 5.0, 0.95, 0.2, 10));
    g.constant("CEQUITY", 8.0);
    g.constant("RWACC", 6.0);
    g.constant("RDELTA", 0.022);
    g.constant("COCU", 0.08);
    g.constant("COC", 0.08);
    g.constant("TQ", 0.1);
    g.put("RIC", &ar1(n, 5.0, 0.95, 0.3, 11));

    // Housing
    g.put("HSALL", &trend(n, 20_000.0, 0.002));
    g.constant("NETAD", 50.0);
    g.put("PEHC", &trend(n, 40.0, 0.003));
    g.put("GPW", &trend(n, 150.0, 0.006));

    // Inventories
    g.put("INV", &trend(n, 100_000.0, 0.003));
    g.put("BV", &trend(n, 80_000.0, 0.004));
    let sa = g.noise(200.0);
    g.put("SA", &sa);
    g.put(
        "DINVPS",
        &zip2(&dinv, &g.col("PDINV"), |d, p| d * p / 100.0),
    );
    g.put("DINVHH", &scale(&g.col("DINVPS"), 0.07));
    let dinvcg = g.noise(100.0);
    g.put("DINVCG", &dinvcg);

    // Public expenditure
    g.put("CGWS", &trend(n, 20_000.0, 0.005));
    g.put("LAWS", &trend(n, 15_000.0, 0.005));
    g.put("CGP", &trend(n, 8000.0, 0.005));
    g.put(
        "OSGG",
        &zip2(&g.col("RCGIM"), &g.col("RLAIM"), |a, b| a + b + 100.0),
    );
    let cggps: Vec<f64> = ["CGWS", "LAWS", "CGP", "LAPR", "RCGIM", "RLAIM"]
        .iter()
        .map(|&name| g.col(name))
        .reduce(|acc, col| zip2(&acc, &col, |a, b| a + b))
        .expect("non-empty component list");
    g.put("CGGPS", &cggps);
    g.put("CGGPSPSF", &cggps);

    // Fiscal totals
    g.put("BPAPS", &trend(n, 40_000.0, 0.005));
    let gvaps = zip2(&g.col("GDPMPS"), &g.col("BPAPS"), |a, b| a - b);
    g.put("GVAPS", &gvaps);
    let ggvaps: Vec<f64> = ["CGWS", "LAWS", "OSGG"]
        .iter()
        .map(|&name| g.col(name))
        .reduce(|acc, col| zip2(&acc, &col, |a, b| a + b))
        .expect("non-empty component list");
    g.put("GGVAPS", &ggvaps);
    g.put("MSGVAPS", &zip2(&gvaps, &ggvaps, |a, b| a - b));

    // Tax revenues
    g.put("CT", &trend(n, 8000.0, 0.005));
    g.put("CETAX", &trend(n, 12_000.0, 0.005));
    g.put("TYEM", &trend(n, 40_000.0, 0.005));
    g.put("INCTAXG", &trend(n, 42_000.0, 0.005));
    g.put("PSCR", &trend(n, 170_000.0, 0.005));
    g.put("NATAXES", &trend(n, 160_000.0, 0.005));

    // Public sector totals
    let pscb = g.noise(5000.0);
    g.put("PSCB", &pscb);
    let t = trend(n, 10_000.0, 0.003);
    let e = g.noise(3000.0);
    g.put("PSNBCY", &zip2(&t, &e, |a, b| a + b));
    let psnd = trend(n, 500_000.0, 0.01);
    g.put("PSND", &psnd);
    g.put("GGGD", &scale(&psnd, 0.95));
    g.put("TME", &trend(n, 200_000.0, 0.005));
    let dep: Vec<f64> = ["RCGIM", "RLAIM", "PCCON"]
        .iter()
        .map(|&name| g.col(name))
        .reduce(|acc, col| zip2(&acc, &col, |a, b| a + b))
        .expect("non-empty component list");
    g.put("DEP", &dep);

    // Balance of payments
    let tb = g.noise(5000.0);
    g.put("TB", &tb);
    let cb = g.noise(5000.0);
    g.put("CB", &cb);
    g.put(
        "CBPCNT",
        &zip2(&cb, &g.col("GDPMPS"), |c, y| c / y * 100.0),
    );
    g.put("NIPD", &trend(n, -2000.0, 0.005));
    g.put("CIPD", &trend(n, 20_000.0, 0.005));
    g.put("DIPD", &trend(n, 22_000.0, 0.005));
    g.put("EECOMPD", &trend(n, 1500.0, 0.005));
    g.put("EECOMPC", &trend(n, 800.0, 0.005));
    g.put("ECUPO", &scale(&rx, 1.15));
    g.put("SRES", &trend(n, 20_000.0, 0.003));
    g.constant("DRES", 0.0);
    g.put("CGCBOP", &trend(n, 500.0, 0.003));
    g.put("CGC", &trend(n, 2000.0, 0.003));

    // Financial: households
    g.put("GFWPE", &trend(n, 3_000_000.0, 0.008));
    let dephh = trend(n, 800_000.0, 0.008);
    g.put("DEPHH", &dephh);
    g.put("DEPHHx", &dephh);
    g.put("EQHH", &trend(n, 500_000.0, 0.01));
    g.put("PIHH", &trend(n, 1_500_000.0, 0.008));
    let oahh = trend(n, 200_000.0, 0.007);
    g.put("OAHH", &oahh);
    g.put("OAHHx", &oahh);
    g.put("OLPEx", &trend(n, 100_000.0, 0.008));
    g.put("EQPR", &trend(n, 50.0, 0.01));
    g.constant("DBR", 0.5);
    let naeqhh = g.noise(5000.0);
    g.put("NAEQHH", &naeqhh);
    g.put("NAEQHHx", &naeqhh);
    g.put("NAPEN", &trend(n, 5000.0, 0.005));
    let nains = g.noise(2000.0);
    g.put("NAINS", &nains);
    g.put("NAINSx", &nains);
    let naolpe = g.noise(3000.0);
    g.put("NAOLPE", &naolpe);
    g.put("NAOLPEx", &naolpe);
    g.constant("DEBTU", 0.02);
    g.constant("GMF", 0.01);
    g.put("SVHH", &trend(n, 10_000.0, 0.005));
    let nafhh = g.noise(5000.0);
    g.put("NAFHH", &nafhh);
    g.put("NAFHHNSA", &nafhh);
    g.put("NLHH", &nafhh);
    g.put("KGHH", &trend(n, 2000.0, 0.005));
    let e = g.noise(1.0);
    g.put("SY", &offset(&e, 5.0));
    g.put("NEAHH", &trend(n, 5000.0, 0.005));
    g.constant("DEPHHADJ", 0.0);
    g.constant("NAEQHHADJ", 0.0);
    g.constant("NAINSADJ", 0.0);
    g.constant("NAOLPEADJ", 0.0);

    // Financial: rest of world
    let arow = trend(n, 4_000_000.0, 0.01);
    g.put("AROW", &arow);
    let lrow = trend(n, 4_500_000.0, 0.01);
    g.put("LROW", &lrow);
    g.put("DAROW", &scale(&arow, 0.3));
    g.put("EQAROW", &scale(&arow, 0.3));
    g.put("BAROW", &scale(&arow, 0.25));
    g.put("OTAROW", &scale(&arow, 0.15));
    g.put("DLROW", &scale(&lrow, 0.25));
    g.put("EQLROW", &scale(&lrow, 0.3));
    g.put("BLROW", &scale(&lrow, 0.25));
    g.put("OTLROW", &scale(&lrow, 0.2));
    g.put(
        "NIIP",
        &zip2(
            &zip2(&lrow, &g.col("SRES"), |l, s| l + s),
            &arow,
            |ls, a| ls - a,
        ),
    );
    let nafrow = g.noise(5000.0);
    g.put("NAFROW", &nafrow);
    g.put("NAFROWNSA", &nafrow);

    // Financial: corporate
    g.put("NWIC", &trend(n, 100_000.0, 0.005));
    g.put("AIC", &trend(n, 500_000.0, 0.008));
    let lic = trend(n, 400_000.0, 0.008);
    g.put("LIC", &lic);
    g.put("EQLIC", &scale(&lic, 0.4));
    g.put("BLIC", &scale(&lic, 0.15));
    g.put("STLIC", &scale(&lic, 0.1));
    g.put("FXLIC", &scale(&lic, 0.08));
    g.put("OLIC", &scale(&lic, 0.05));

    // Operating surplus components
    let os = trend(n, 80_000.0, 0.005);
    g.put("OS", &os);
    g.put("FYCPR", &trend(n, 50_000.0, 0.005));
    g.put("GTPFC", &trend(n, 40_000.0, 0.005));
    g.put("FC", &trend(n, 45_000.0, 0.005));
    g.put("OSCO", &scale(&os, 0.7));
    g.put("RENTCO", &trend(n, 5000.0, 0.005));
    g.put(
        "IROO",
        &zip2(&g.col("PRENT"), &pop16, |p, pop| p * pop / 1000.0),
    );
    g.put("FISIMPS", &trend(n, 10_000.0, 0.005));

    // National income
    g.put("GNIPS", &scale(&g.col("GDPMPS"), 1.01));
    g.put(
        "GAP",
        &zip2(&gdp, &g.col("TRGDP"), |a, tr| a / tr * 100.0 - 100.0),
    );

    // Wage bill components
    g.put("CGASC", &trend(n, 2000.0, 0.005));
    g.put("CGISC", &trend(n, 1000.0, 0.005));
    g.put("LASC", &trend(n, 1500.0, 0.005));
    g.put("EESCCG", &trend(n, 3000.0, 0.005));
    g.put("EESCLA", &trend(n, 2500.0, 0.005));
    g.put("EMPCPP", &trend(n, 4000.0, 0.005));
    g.put("EMPISCPP", &trend(n, 2000.0, 0.005));
    g.put("OSB", &trend(n, 3000.0, 0.005));
    g.put("HHSB", &scale(&g.col("HHISC"), 2.0));
    g.put(
        "EMPASC",
        &zip2(&empsc, &g.col("EMPISC"), |a, b| a - b),
    );

    // Benefits and transfers
    g.put("SBHH", &trend(n, 60_000.0, 0.005));
    g.put("TYWHH", &trend(n, 50_000.0, 0.005));
    g.put("NMTRHH", &trend(n, 3000.0, 0.003));
    g.put("PIRHH", &trend(n, 30_000.0, 0.006));
    g.put("PIPHH", &trend(n, 15_000.0, 0.006));
    g.put("NDIVHH", &trend(n, 8000.0, 0.006));
    g.put("WYQC", &trend(n, 2000.0, 0.005));
    g.put("EECPP", &trend(n, 5000.0, 0.005));
    g.put("EESC", &trend(n, 12_000.0, 0.005));

    // Interest income/payments
    let dirhh = trend(n, 8000.0, 0.005);
    g.put("DIRHH", &dirhh);
    let dirhhf = trend(n, -2000.0, 0.005);
    g.put("DIRHHf", &dirhhf);
    g.put("DIRHHx", &zip2(&dirhh, &dirhhf, |a, b| a - b));
    g.put("DIPHHx", &trend(n, 12_000.0, 0.005));
    g.put("DIPHHmf", &trend(n, 3000.0, 0.005));
    let diric = trend(n, 5000.0, 0.005);
    g.put("DIRIC", &diric);
    let diricf = trend(n, -1000.0, 0.005);
    g.put("DIRICf", &diricf);
    g.put("DIRICx", &zip2(&diric, &diricf, |a, b| a - b));
    let dipic = trend(n, 4000.0, 0.005);
    g.put("DIPIC", &dipic);
    let dipicf = trend(n, 1000.0, 0.005);
    g.put("DIPICf", &dipicf);
    g.put("DIPICx", &zip2(&dipic, &dipicf, |a, b| a + b));

    // Sector net lending
    let nafco = g.noise(5000.0);
    g.put("NAFCO", &nafco);
    let naffc = g.noise(3000.0);
    g.put("NAFFC", &naffc);
    g.put("NAFIC", &zip2(&nafco, &naffc, |a, b| a - b));
    g.put("SAVCO", &trend(n, 20_000.0, 0.005));

    // ULC and cost indices
    g.put("ULCPS", &trend(n, 60.0, 0.005));
    g.put("ULCMS", &trend(n, 65.0, 0.005));
    g.constant("MCOST", 100.0);
    g.constant("SCOST", 100.0);
    g.constant("CCOST", 100.0);
    g.constant("UTCOST", 100.0);
    g.constant("RPCOST", 100.0);
    g.constant("ICOST", 100.0);
    g.constant("XGCOST", 100.0);
    g.constant("XSCOST", 100.0);
    g.constant("MKGW", 100.0);
    g.constant("MKR", 100.0);

    // RPI components
    g.put("PRMIP", &trend(n, 200.0, 0.005));
    g.put("PR", &trend(n, 250.0, 0.005));
    g.constant("RPI", 3.0);

    // Misc identities
    g.put("RPRICE", &trend(n, 1.0, 0.001));
    g.put("RPW", &trend(n, 30.0, 0.003));
    g.put("RCW", &trend(n, 25.0, 0.003));
    let wrgtp = trend(n, 1000.0, 0.002);
    g.put("WRGTP", &wrgtp);
    g.put("WFJ", &zip2(&et, &wrgtp, |a, b| a + b));
    g.put(
        "ER",
        &zip2(&g.col("ETLFS"), &pop16, |e, p| 100.0 * e / p),
    );

    // Mortgage and housing rates
    g.put("RHF", &trend(n, 4.0, 0.001));
    g.put("NSGTP", &trend(n, 3000.0, 0.005));
    g.put("NNSGTP", &trend(n, 40_000.0, 0.005));

    // Public sector lending
    let cgnb = g.noise(3000.0);
    g.put("CGNB", &cgnb);
    let lanb = g.noise(2000.0);
    g.put("LANB", &lanb);
    let ggnb = zip2(&cgnb, &lanb, |a, b| a + b);
    g.put("GGNB", &ggnb);
    g.put("GGNBCY", &ggnb);
    let pcnb = g.noise(1000.0);
    g.put("PCNB", &pcnb);
    g.put("PCNBCY", &pcnb);
    g.put("TDEF", &ggnb);
    g.put("PSGI", &trend(n, 18_000.0, 0.005));
    g.put("PSNBNSA", &g.col("PSNBCY"));

    g.put("PSTA", &trend(n, 400_000.0, 0.005));
    g.put("PSFA", &trend(n, 100_000.0, 0.005));
    let liabilities = trend(n, 500_000.0, 0.01);
    g.put(
        "PSNW",
        &zip2(
            &zip2(&g.col("PSTA"), &g.col("PSFA"), |a, b| a + b),
            &liabilities,
            |assets, l| assets - l,
        ),
    );

    let cgncr = g.noise(3000.0);
    g.put("CGNCR", &cgncr);
    let psncr = g.noise(5000.0);
    g.put("PSNCR", &psncr);
    let labro = g.noise(2000.0);
    g.put("LABRO", &labro);

    g.constant("SWAPS", 0.0);

    // Government totals
    g.put("CGTSUB", &trend(n, 5000.0, 0.005));
    g.put("LATSUB", &trend(n, 3000.0, 0.005));
    g.put("LASUBPR", &trend(n, 1500.0, 0.005));
    g.put("CGSUBP", &trend(n, 3000.0, 0.005));
    g.put("CGNCGA", &g.col("TROD"));

    // Public corporations
    g.put("PUBSTIW", &trend(n, 50_000.0, 0.005));
    g.put("PUBSTPD", &trend(n, 50_000.0, 0.005));

    // Transfers
    let tranc = trend(n, 5000.0, 0.005);
    g.put("TRANC", &tranc);
    let trand = trend(n, 6000.0, 0.005);
    g.put("TRAND", &trand);
    g.put("TRANB", &zip2(&tranc, &trand, |a, b| a - b));

    // EU variables
    g.constant("EUSUBP", 0.0);
    g.put("EUSUBPR", &trend(n, 500.0, 0.003));
    g.put("EUSF", &trend(n, 300.0, 0.003));
    g.put("ECNET", &trend(n, 2000.0, 0.003));
    g.put("GNP4", &trend(n, 1000.0, 0.005));
    g.put("EUVAT", &trend(n, 500.0, 0.005));
    g.put("BENAB", &trend(n, 200.0, 0.005));
    g.put("CGITFA", &trend(n, 100.0, 0.005));
    g.put("ITA", &trend(n, 150.0, 0.005));
    g.put("HHTFA", &trend(n, 300.0, 0.005));
    g.put("HHTA", &trend(n, 200.0, 0.005));
    g.put("CGKTA", &trend(n, 400.0, 0.005));

    // Imports sub-components
    let mc = scale(&g.col("CONS"), 0.257);
    g.put("MC", &mc);
    let mcgg = scale(&g.col("CGG"), 0.094);
    g.put("MCGG", &mcgg);
    let mif = scale(&g.col("IF"), 0.234);
    g.put("MIF", &mif);
    let mdinv = scale(&dinv, 0.106);
    g.put("MDINV", &mdinv);
    let mxs = scale(&g.col("XS"), 0.142);
    g.put("MXS", &mxs);
    let mxg = scale(
        &zip2(&g.col("XOIL"), &g.col("XNOG"), |a, b| a + b),
        0.376,
    );
    g.put("MXG", &mxg);
    let mtfe = [mc, mcgg, mif, mdinv, mxs, mxg]
        .into_iter()
        .reduce(|acc, col| zip2(&acc, &col, |a, b| a + b))
        .expect("non-empty component list");
    g.put("MTFE", &mtfe);
    g.constant("MINTY", 100.0);
    g.put("MGTFE", &trend(n, 50_000.0, 0.005));
    g.constant("PMGREL", 1.0);
    g.put("MSTFE", &trend(n, 15_000.0, 0.005));
    g.constant("PMSREL", 1.0);

    // Financial sector
    g.put("M4IC", &trend(n, 500_000.0, 0.008));
    let m4: Vec<f64> = ["DEPHH", "M4IC", "M4OFC"]
        .iter()
        .map(|&name| g.col(name))
        .reduce(|acc, col| zip2(&acc, &col, |a, b| a + b))
        .expect("non-empty component list");
    g.put("M4", &m4);

    // Base year constants
    g.constant("OILBASE", 50.0);
    g.constant("ULCPSBASE", 60.0);
    g.constant("ULCMSBASE", 65.0);
    g.constant("PMNOGBASE", 34.0);
    g.constant("PMSBASE", 35.0);
    g.constant("TXRATEBASE", 0.15);
    g.constant("PPIYBASE", 35.0);
    g.constant("CPIXBASE", 30.0);

    // Portfolio returns
    g.constant("REXC", 3.0);
    g.constant("REXD", 3.0);

    // Misc ratios
    g.constant("SDLHH", 0.0);
    g.constant("SDLROW", 0.0);
    g.put("SDI", &trend(n, 2000.0, 0.003));

    // Housing completions
    g.put("PCLEB", &trend(n, 2000.0, 0.003));

    // Financial transactions
    for name in [
        "NAEQAROW", "NABAROW", "NAOTAROW", "NAOTLROW", "NADLROW", "NAEQLROW", "NABLROW",
        "AAROW", "ALROW_calc", "NABLIC", "NAFXLIC", "NAEQLIC", "NALIC", "NAAIC", "AAHH",
        "ALHH", "HHRES", "OAHHADJ", "GGLIQ", "PSLSFA", "PSACADJ", "CGACADJ", "PSFL", "CGLSFA",
    ] {
        let values = g.noise(1000.0);
        g.put(name, &values);
    }

    // Public sector receipts detail
    g.put("TAXCRED", &trend(n, 5000.0, 0.005));
    g.put("PSINTR", &trend(n, 1000.0, 0.005));
    g.put("CGRENT", &trend(n, 500.0, 0.005));
    g.put("VED", &trend(n, 1500.0, 0.005));
    g.put("OCT", &trend(n, 2000.0, 0.005));
    g.put("TPRODPS", &trend(n, 5000.0, 0.005));

    // Demand weighted averages
    g.put(
        "MSGVAPSEMP",
        &zip2(&g.col("MSGVAPS"), &g.col("MI"), |a, b| a - b),
    );
    let fyempms: Vec<f64> = {
        let fyemp = g.col("FYEMP");
        let cgws = g.col("CGWS");
        let laws = g.col("LAWS");
        (0..n).map(|i| fyemp[i] - cgws[i] - laws[i]).collect()
    };
    g.put("FYEMPMS", &fyempms);

    // Private sector employment
    let eps: Vec<f64> = {
        let ecg = g.col("ECG");
        let ela = g.col("ELA");
        (0..n).map(|i| et[i] - ecg[i] - ela[i]).collect()
    };
    g.put("EPS", &eps);

    // Total population across demographic groups
    let gad: Vec<f64> = {
        let gad1 = g.col("GAD1");
        let gad2 = g.col("GAD2");
        let gad3 = g.col("GAD3");
        (0..n).map(|i| gad1[i] + gad2[i] + gad3[i]).collect()
    };
    g.put("GAD", &gad);

    // Net financial wealth consistent with its components
    let nfwpe: Vec<f64> = {
        let gfwpe = g.col("GFWPE");
        let lhp = g.col("LHP");
        let olpe = g.col("OLPE");
        (0..n).map(|i| gfwpe[i] - lhp[i] - olpe[i]).collect()
    };
    g.put("NFWPE", &nfwpe);

    // --- Additive adjustments (all zero) ---
    for (_, adjustment) in config::adjustments().iter() {
        g.constant(adjustment, 0.0);
    }

    g.store
}

#[cfg(test)]
mod tests {
    use super::generate_synthetic_store;
    use crate::{config, equations};

    #[test]
    fn generation_is_deterministic() {
        let a = generate_synthetic_store();
        let b = generate_synthetic_store();
        let p = config::history_end();
        for name in ["GDPM", "CPI", "RX", "PSNBCY"] {
            assert_eq!(a.get(p, name).unwrap(), b.get(p, name).unwrap());
        }
    }

    #[test]
    fn store_spans_history_and_forecast() {
        let store = generate_synthetic_store();
        assert_eq!(store.first_period(), config::history_start());
        assert_eq!(store.last_period(), config::forecast_end());
        assert!(store.column_count() > 400);
    }

    #[test]
    fn runup_window_is_gap_free_for_seeded_endogenous_columns() {
        // The solver's range validation requires every endogenous column
        // that exists to be defined over the run-up window.
        let store = generate_synthetic_store();
        let registry = equations::registry().unwrap();
        for name in registry.names() {
            if !store.has_column(name) {
                continue;
            }
            for k in 1..=equations::MAX_LAG {
                let period = config::forecast_start() - k;
                assert!(
                    store.is_defined(period, name),
                    "{name} undefined at {period}"
                );
            }
        }
    }
}
