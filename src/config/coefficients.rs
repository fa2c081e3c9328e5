//! 미니맥스 유리근사 계수 테이블
//!
//! 각 테이블은 축약 구간 위의 커널 함수 k(y)를 `y·p(y)/q(y)` 로 근사한다.
//! 분자, 분모 모두 y의 오름차순 계수이며 `q(0) = 1` 이다.
//! 여러 함수가 같은 커널을 공유하므로 테이블은 여기에만 한 번 정의한다.

use crate::utils::numeric::Rational;

/// log(1-y)/y, 0 <= y <= 0.5
pub const LOG_ONE_MINUS: Rational<6, 7> = Rational::new(
    [
        -0.9999999999999999,
        2.7601168443679116,
        -2.7923621883637093,
        1.2497503713725826,
        -0.23173044836039025,
        0.012188323559602391,
    ],
    [
        1.0,
        -3.2601168443679653,
        4.089087277218119,
        -2.457588395296002,
        0.7125247661598066,
        -0.08616970389093158,
        0.0026519629643638053,
    ],
);

/// Li2(y)/y, 1e-4 <= y <= 0.5
pub const DILOG_POSITIVE: Rational<6, 7> = Rational::new(
    [
        1.0,
        -2.688430304910592,
        2.647804306467981,
        -1.1539162530148495,
        0.2088775143965188,
        -0.01086107743467447,
    ],
    [
        1.0,
        -2.9384303049106135,
        3.271300771586057,
        -1.7077491898534407,
        0.4159888430338583,
        -0.039805247256814134,
        0.0008275501410732045,
    ],
);

/// Li2(y)/y, -1 <= y <= -1e-4
pub const DILOG_NEGATIVE: Rational<6, 7> = Rational::new(
    [
        0.9999999999999999,
        -2.175844630657619,
        1.6555942695751116,
        -0.5228898146531188,
        0.06259754906080219,
        -0.001872382482694314,
    ],
    [
        1.0,
        -2.425844630657592,
        2.150944316130169,
        -0.8535876013451572,
        0.14861592651355132,
        -0.009361304720035178,
        0.00011533394212474942,
    ],
);

/// Li3(y)/y, 1e-4 <= y < 0.5
pub const TRILOG_POSITIVE: Rational<6, 7> = Rational::new(
    [
        1.0,
        -2.5225087681785685,
        2.3205667855092735,
        -0.9398603950602648,
        0.15730234392961046,
        -0.007549423015779752,
    ],
    [
        1.0,
        -2.6475087681785734,
        2.6144683444949037,
        -1.1842380578292087,
        0.24186726490232288,
        -0.018222790964808076,
        0.0002493147735331285,
    ],
);

/// Li3(y)/y, -1 <= y <= -1e-4
pub const TRILOG_NEGATIVE: Rational<6, 7> = Rational::new(
    [
        1.0,
        -2.028145591106064,
        1.4363491768494536,
        -0.42238055117778583,
        0.047292383318533616,
        -0.0013451800040195675,
    ],
    [
        1.0,
        -2.153145591106056,
        1.668455338701193,
        -0.5668163354985445,
        0.08199268311164619,
        -0.004075146019814264,
        3.431140552745879e-05,
    ],
);

/// (-Li3(y/(y-1)) - Li3(y))/y, 1e-4 <= y < 0.5. 상수항이 0이다.
pub const TRILOG_REFLECTION: Rational<7, 8> = Rational::new(
    [
        0.0,
        0.75,
        -2.1777582585501256,
        2.2971231247321238,
        -1.045589272339749,
        0.18551293485607298,
        -0.008786419623389576,
    ],
    [
        1.0,
        -3.9036776780668347,
        6.02669369622825,
        -4.631708241537193,
        1.822391869983963,
        -0.3364704768802366,
        0.023067775463027466,
        -0.0002858598933044419,
    ],
);

/// arctan(y)/y, 1e-3 <= y < 1
pub const ARCTAN: Rational<9, 10> = Rational::new(
    [
        1.0,
        1.8342348086649656,
        3.3257594029617756,
        3.599073972028107,
        3.225054683389189,
        2.0790695069014333,
        1.0011354591290798,
        0.3180364066367145,
        0.05254792829976176,
    ],
    [
        1.0,
        1.834234808664968,
        3.6590927362947703,
        4.210485574934895,
        4.244752261624873,
        3.1157177460107373,
        1.8270913698071678,
        0.7765462598117671,
        0.22423950752923047,
        0.03341982188233619,
    ],
);

/// Ti2(y)/y, 1e-4 <= y < 1
pub const ATANINT: Rational<9, 10> = Rational::new(
    [
        1.0,
        1.0100093542230733,
        2.145522067331765,
        1.530507635281255,
        1.4078551331250402,
        0.642278783916769,
        0.2878929809916056,
        0.06324944590104378,
        0.009053476070284335,
    ],
    [
        1.0,
        1.0100093542230726,
        2.2566331784429803,
        1.642730896856432,
        1.6185921530867935,
        0.7844040628261129,
        0.39787941177428304,
        0.10530849411572514,
        0.022227486952458724,
        0.001377620570186512,
    ],
);

/// log(1+y)/y, 1e-3 <= |y| < 0.3
pub const LOG_ONE_PLUS: Rational<6, 7> = Rational::new(
    [
        1.0,
        2.535499216974427,
        2.312865095778713,
        0.9091180170553916,
        0.14229189572592746,
        0.005908027968398478,
    ],
    [
        1.0,
        3.035499216974426,
        3.4972813709325963,
        1.8959256301972143,
        0.483369058090342,
        0.04950451292854379,
        0.0012137637778754891,
    ],
);
