//! Bundled example capture
//!
//! 1024 codes from a 12-bit converter digitizing a sine near bin 83.
//! Used as the default input of `adc-analyze`.

/// Example 12-bit ADC capture
pub const SAMPLE_ADC_DATA: [f64; 1024] = [
    2762.0, 3552.0, 3939.0, 3849.0, 3321.0, 2478.0, 1521.0, 691.0, 201.0, 173.0, 620.0, 1445.0, 2437.0, 3323.0, 3861.0, 3932.0,
    3542.0, 2787.0, 1841.0, 940.0, 318.0, 128.0, 420.0, 1135.0, 2101.0, 3053.0, 3728.0, 3963.0, 3721.0, 3073.0, 2167.0, 1225.0,
    486.0, 137.0, 270.0, 855.0, 1761.0, 2750.0, 3545.0, 3937.0, 3853.0, 3328.0, 2490.0, 1531.0, 697.0, 204.0, 171.0, 613.0,
    1434.0, 2426.0, 3315.0, 3857.0, 3934.0, 3550.0, 2798.0, 1852.0, 951.0, 323.0, 128.0, 414.0, 1124.0, 2088.0, 3044.0, 3723.0,
    3962.0, 3727.0, 3083.0, 2179.0, 1235.0, 492.0, 140.0, 265.0, 846.0, 1751.0, 2740.0, 3537.0, 3936.0, 3857.0, 3338.0, 2500.0,
    1543.0, 707.0, 207.0, 168.0, 604.0, 1421.0, 2414.0, 3305.0, 3853.0, 3936.0, 3555.0, 2808.0, 1865.0, 959.0, 327.0, 127.0,
    408.0, 1114.0, 2076.0, 3033.0, 3718.0, 3963.0, 3731.0, 3092.0, 2190.0, 1245.0, 499.0, 141.0, 261.0, 836.0, 1737.0, 2728.0,
    3530.0, 3933.0, 3860.0, 3346.0, 2511.0, 1553.0, 714.0, 211.0, 165.0, 597.0, 1410.0, 2402.0, 3296.0, 3850.0, 3937.0, 3564.0,
    2818.0, 1876.0, 970.0, 334.0, 127.0, 402.0, 1104.0, 2065.0, 3022.0, 3711.0, 3963.0, 3738.0, 3102.0, 2203.0, 1256.0, 506.0,
    144.0, 256.0, 827.0, 1726.0, 2717.0, 3522.0, 3931.0, 3864.0, 3354.0, 2523.0, 1566.0, 724.0, 214.0, 164.0, 589.0, 1399.0,
    2390.0, 3287.0, 3846.0, 3940.0, 3570.0, 2829.0, 1888.0, 978.0, 339.0, 127.0, 396.0, 1093.0, 2052.0, 3011.0, 3705.0, 3962.0,
    3743.0, 3110.0, 2213.0, 1267.0, 513.0, 144.0, 252.0, 819.0, 1714.0, 2706.0, 3513.0, 3929.0, 3868.0, 3363.0, 2534.0, 1577.0,
    732.0, 218.0, 161.0, 581.0, 1387.0, 2378.0, 3277.0, 3842.0, 3942.0, 3577.0, 2840.0, 1899.0, 989.0, 343.0, 127.0, 389.0,
    1083.0, 2040.0, 3001.0, 3699.0, 3962.0, 3748.0, 3122.0, 2225.0, 1277.0, 520.0, 146.0, 248.0, 808.0, 1702.0, 2694.0, 3507.0,
    3927.0, 3872.0, 3372.0, 2546.0, 1588.0, 740.0, 222.0, 159.0, 572.0, 1377.0, 2366.0, 3268.0, 3836.0, 3944.0, 3584.0, 2850.0,
    1910.0, 998.0, 349.0, 125.0, 383.0, 1072.0, 2028.0, 2991.0, 3692.0, 3961.0, 3753.0, 3131.0, 2237.0, 1288.0, 528.0, 148.0,
    244.0, 799.0, 1690.0, 2683.0, 3500.0, 3924.0, 3875.0, 3380.0, 2556.0, 1599.0, 749.0, 225.0, 157.0, 567.0, 1365.0, 2354.0,
    3259.0, 3834.0, 3944.0, 3591.0, 2860.0, 1923.0, 1009.0, 356.0, 126.0, 377.0, 1062.0, 2015.0, 2980.0, 3686.0, 3960.0, 3759.0,
    3140.0, 2249.0, 1298.0, 534.0, 150.0, 240.0, 791.0, 1679.0, 2672.0, 3491.0, 3923.0, 3878.0, 3388.0, 2569.0, 1610.0, 757.0,
    229.0, 155.0, 558.0, 1354.0, 2343.0, 3248.0, 3828.0, 3947.0, 3597.0, 2872.0, 1934.0, 1019.0, 361.0, 125.0, 372.0, 1052.0,
    2004.0, 2969.0, 3681.0, 3961.0, 3764.0, 3149.0, 2260.0, 1309.0, 542.0, 152.0, 235.0, 782.0, 1665.0, 2660.0, 3482.0, 3920.0,
    3881.0, 3397.0, 2579.0, 1622.0, 767.0, 232.0, 153.0, 552.0, 1343.0, 2331.0, 3240.0, 3824.0, 3948.0, 3605.0, 2881.0, 1946.0,
    1028.0, 367.0, 125.0, 366.0, 1043.0, 1992.0, 2958.0, 3675.0, 3960.0, 3769.0, 3159.0, 2272.0, 1320.0, 548.0, 154.0, 232.0,
    773.0, 1655.0, 2648.0, 3474.0, 3918.0, 3885.0, 3405.0, 2590.0, 1633.0, 774.0, 236.0, 151.0, 544.0, 1331.0, 2319.0, 3232.0,
    3819.0, 3949.0, 3611.0, 2892.0, 1957.0, 1039.0, 372.0, 126.0, 360.0, 1032.0, 1980.0, 2948.0, 3669.0, 3960.0, 3774.0, 3169.0,
    2283.0, 1331.0, 556.0, 155.0, 228.0, 764.0, 1644.0, 2636.0, 3467.0, 3916.0, 3888.0, 3412.0, 2601.0, 1645.0, 783.0, 241.0,
    149.0, 536.0, 1320.0, 2306.0, 3221.0, 3815.0, 3951.0, 3617.0, 2902.0, 1969.0, 1048.0, 378.0, 125.0, 355.0, 1021.0, 1967.0,
    2938.0, 3662.0, 3959.0, 3779.0, 3179.0, 2295.0, 1342.0, 564.0, 158.0, 224.0, 755.0, 1631.0, 2624.0, 3459.0, 3912.0, 3891.0,
    3420.0, 2611.0, 1656.0, 793.0, 245.0, 147.0, 530.0, 1309.0, 2295.0, 3212.0, 3810.0, 3952.0, 3624.0, 2912.0, 1980.0, 1058.0,
    384.0, 125.0, 350.0, 1012.0, 1955.0, 2927.0, 3655.0, 3957.0, 3784.0, 3187.0, 2306.0, 1353.0, 572.0, 161.0, 220.0, 746.0,
    1619.0, 2615.0, 3451.0, 3910.0, 3894.0, 3428.0, 2623.0, 1667.0, 801.0, 249.0, 146.0, 521.0, 1298.0, 2283.0, 3202.0, 3806.0,
    3953.0, 3629.0, 2922.0, 1992.0, 1069.0, 389.0, 126.0, 344.0, 1001.0, 1943.0, 2917.0, 3649.0, 3957.0, 3789.0, 3195.0, 2317.0,
    1364.0, 579.0, 162.0, 217.0, 737.0, 1608.0, 2602.0, 3444.0, 3907.0, 3897.0, 3437.0, 2634.0, 1679.0, 810.0, 253.0, 145.0,
    514.0, 1286.0, 2271.0, 3192.0, 3801.0, 3955.0, 3637.0, 2933.0, 2005.0, 1079.0, 395.0, 127.0, 338.0, 992.0, 1931.0, 2905.0,
    3642.0, 3956.0, 3794.0, 3205.0, 2329.0, 1375.0, 587.0, 165.0, 214.0, 729.0, 1596.0, 2591.0, 3435.0, 3904.0, 3900.0, 3444.0,
    2645.0, 1690.0, 819.0, 257.0, 142.0, 508.0, 1276.0, 2258.0, 3183.0, 3797.0, 3954.0, 3643.0, 2943.0, 2016.0, 1088.0, 401.0,
    127.0, 333.0, 981.0, 1918.0, 2895.0, 3636.0, 3956.0, 3797.0, 3215.0, 2341.0, 1386.0, 593.0, 167.0, 210.0, 720.0, 1584.0,
    2578.0, 3428.0, 3900.0, 3902.0, 3452.0, 2657.0, 1703.0, 829.0, 261.0, 141.0, 500.0, 1264.0, 2246.0, 3173.0, 3793.0, 3956.0,
    3650.0, 2953.0, 2028.0, 1099.0, 408.0, 128.0, 328.0, 971.0, 1906.0, 2884.0, 3629.0, 3955.0, 3802.0, 3224.0, 2353.0, 1398.0,
    602.0, 169.0, 206.0, 711.0, 1573.0, 2568.0, 3418.0, 3898.0, 3907.0, 3460.0, 2668.0, 1714.0, 838.0, 267.0, 139.0, 493.0,
    1255.0, 2234.0, 3163.0, 3787.0, 3956.0, 3657.0, 2964.0, 2039.0, 1110.0, 413.0, 128.0, 323.0, 960.0, 1895.0, 2873.0, 3623.0,
    3953.0, 3807.0, 3232.0, 2364.0, 1408.0, 610.0, 172.0, 203.0, 704.0, 1561.0, 2556.0, 3409.0, 3896.0, 3908.0, 3468.0, 2678.0,
    1725.0, 847.0, 271.0, 139.0, 486.0, 1243.0, 2221.0, 3154.0, 3781.0, 3957.0, 3662.0, 2974.0, 2051.0, 1121.0, 420.0, 128.0,
    317.0, 951.0, 1883.0, 2862.0, 3616.0, 3952.0, 3811.0, 3242.0, 2375.0, 1419.0, 618.0, 174.0, 201.0, 695.0, 1549.0, 2544.0,
    3400.0, 3892.0, 3912.0, 3475.0, 2690.0, 1736.0, 856.0, 274.0, 136.0, 480.0, 1231.0, 2210.0, 3145.0, 3776.0, 3958.0, 3669.0,
    2984.0, 2063.0, 1130.0, 425.0, 129.0, 313.0, 942.0, 1871.0, 2851.0, 3609.0, 3951.0, 3815.0, 3250.0, 2387.0, 1430.0, 624.0,
    177.0, 196.0, 686.0, 1538.0, 2533.0, 3393.0, 3889.0, 3914.0, 3482.0, 2701.0, 1749.0, 865.0, 280.0, 136.0, 474.0, 1221.0,
    2197.0, 3134.0, 3771.0, 3959.0, 3674.0, 2994.0, 2074.0, 1140.0, 432.0, 130.0, 307.0, 931.0, 1857.0, 2840.0, 3602.0, 3950.0,
    3819.0, 3260.0, 2400.0, 1442.0, 632.0, 180.0, 193.0, 677.0, 1525.0, 2520.0, 3385.0, 3886.0, 3916.0, 3491.0, 2711.0, 1759.0,
    874.0, 284.0, 135.0, 466.0, 1211.0, 2186.0, 3123.0, 3767.0, 3961.0, 3681.0, 3005.0, 2085.0, 1151.0, 439.0, 130.0, 302.0,
    921.0, 1846.0, 2829.0, 3596.0, 3949.0, 3825.0, 3269.0, 2409.0, 1452.0, 641.0, 183.0, 191.0, 669.0, 1515.0, 2508.0, 3376.0,
    3881.0, 3919.0, 3498.0, 2722.0, 1771.0, 883.0, 288.0, 133.0, 460.0, 1200.0, 2174.0, 3115.0, 3761.0, 3961.0, 3686.0, 3013.0,
    2097.0, 1161.0, 445.0, 132.0, 297.0, 912.0, 1833.0, 2818.0, 3588.0, 3947.0, 3829.0, 3277.0, 2421.0, 1463.0, 649.0, 186.0,
    187.0, 661.0, 1502.0, 2497.0, 3366.0, 3879.0, 3922.0, 3505.0, 2733.0, 1783.0, 894.0, 293.0, 132.0, 452.0, 1189.0, 2161.0,
    3104.0, 3756.0, 3961.0, 3692.0, 3023.0, 2108.0, 1171.0, 451.0, 132.0, 293.0, 903.0, 1822.0, 2807.0, 3581.0, 3946.0, 3833.0,
    3285.0, 2433.0, 1475.0, 657.0, 188.0, 184.0, 652.0, 1491.0, 2485.0, 3358.0, 3876.0, 3924.0, 3512.0, 2742.0, 1794.0, 903.0,
    299.0, 131.0, 446.0, 1179.0, 2149.0, 3094.0, 3751.0, 3961.0, 3699.0, 3034.0, 2120.0, 1182.0, 458.0, 134.0, 287.0, 893.0,
    1810.0, 2796.0, 3575.0, 3944.0, 3838.0, 3295.0, 2444.0, 1484.0, 665.0, 192.0, 181.0, 644.0, 1480.0, 2473.0, 3349.0, 3873.0,
    3926.0, 3521.0, 2754.0, 1806.0, 912.0, 302.0, 130.0, 439.0, 1168.0, 2137.0, 3083.0, 3746.0, 3961.0, 3703.0, 3044.0, 2132.0,
    1192.0, 465.0, 135.0, 283.0, 883.0, 1799.0, 2784.0, 3567.0, 3943.0, 3841.0, 3303.0, 2455.0, 1497.0, 673.0, 194.0, 178.0,
    637.0, 1468.0, 2462.0, 3341.0, 3870.0, 3928.0, 3527.0, 2764.0, 1817.0, 921.0, 307.0, 129.0, 433.0, 1156.0, 2125.0, 3074.0,
    3739.0, 3962.0, 3710.0, 3054.0, 2144.0, 1203.0, 472.0, 136.0, 279.0, 873.0, 1787.0, 2773.0, 3560.0, 3941.0, 3845.0, 3312.0,
    2467.0, 1508.0, 681.0, 197.0, 177.0, 629.0, 1457.0, 2448.0, 3332.0, 3864.0, 3930.0, 3534.0, 2776.0, 1829.0, 932.0, 313.0,
    129.0, 426.0, 1146.0, 2113.0, 3064.0, 3734.0, 3962.0, 3715.0, 3063.0, 2155.0, 1214.0, 478.0, 137.0, 274.0, 864.0, 1775.0,
];

/// Resolution the example capture was taken at
pub const SAMPLE_ADC_BITS: u32 = 12;
