use super::{MainWeapon, SpecialWeapon, SubWeapon};

pub static MAIN_WEAPONS: &[MainWeapon] = &[
    main("わかばシューター", "シューター", "Splattershot_Jr.png"),
    main("ボールドマーカー", "シューター", "Sploosh-o-matic.png"),
    main("シャープマーカー", "シューター", "Splash-o-matic.png"),
    main("プロモデラー", "シューター", "Aerospray.png"),
    main("スプラシューター", "シューター", "Splattershot.png"),
    main(".52ガロン", "シューター", ".52_Gal.png"),
    main("N-ZAP", "シューター", "N-ZAP.png"),
    main("プライムシューター", "シューター", "Splattershot_Pro.png"),
    main(".96ガロン", "シューター", ".96_Gal.png"),
    main("ジェットスイーパー", "シューター", "Jet_Squelcher.png"),
    main("L3リールガン", "シューター", "L-3_Nozzlenose.png"),
    main("H3リールガン", "シューター", "H-3_Nozzlenose.png"),
    main("ボトルガイザー", "シューター", "Squeezer.png"),
    main("スペースシューター", "シューター", "Splattershot_Nova.png"),

    main("カーボンローラー", "ローラー", "Carbon_Roller.png"),
    main("スプラローラー", "ローラー", "Splat_Roller.png"),
    main("ダイナモローラー", "ローラー", "Dynamo_Roller.png"),
    main("ヴァリアブルローラー", "ローラー", "Flingza_Roller.png"),
    main("ワイドローラー", "ローラー", "Big_Swig_Roller.png"),

    main("スクイックリン", "チャージャー", "Classic_Squiffer.png"),
    main("スプラチャージャー", "チャージャー", "Splat_Charger.png"),
    main("スプラスコープ", "チャージャー", "Splatterscope.png"),
    main("リッター4K", "チャージャー", "E-liter_4K.png"),
    main("4Kスコープ", "チャージャー", "E-liter_4K_Scope.png"),
    main("14式竹筒銃", "チャージャー", "Bamboozler_14.png"),
    main("ソイチューバー", "チャージャー", "Goo_Tuber.png"),
    main("R-PEN", "チャージャー", "Snipewriter.png"),

    main("ヒッセン", "スロッシャー", "Tri-Slosher.png"),
    main("バケットスロッシャー", "スロッシャー", "Slosher.png"),
    main("スクリュースロッシャー", "スロッシャー", "Sloshing_Machine.png"),
    main("オーバーフロッシャー", "スロッシャー", "Bloblobber.png"),
    main("エクスプロッシャー", "スロッシャー", "Explosher.png"),
    main("モップリン", "スロッシャー", "Dread_Wringer.png"),

    main("スプラスピナー", "スピナー", "Mini_Splatling.png"),
    main("バレルスピナー", "スピナー", "Heavy_Splatling.png"),
    main("ハイドラント", "スピナー", "Hydra_Splatling.png"),
    main("クーゲルシュライバー", "スピナー", "Ballpoint_Splatling.png"),
    main("ノーチラス", "スピナー", "Nautilus.png"),
    main("イグザミナー", "スピナー", "Heavy_Edit_Splatling.png"),

    main("スパッタリー", "マニューバー", "Dapple_Dualies.png"),
    main("スプラマニューバー", "マニューバー", "Splat_Dualies.png"),
    main("デュアルスイーパー", "マニューバー", "Dualie_Squelchers.png"),
    main("ケルビン525", "マニューバー", "Glooga_Dualies.png"),
    main("クアッドホッパー", "マニューバー", "Tetra_Dualies.png"),
    main("ガエンFF", "マニューバー", "Douser_Dualies_FF.png"),

    main("パラシェルター", "シェルター", "Splat_Brella.png"),
    main("キャンピングシェルター", "シェルター", "Tenta_Brella.png"),
    main("スパイガジェット", "シェルター", "Undercover_Brella.png"),
    main("24式張替傘", "シェルター", "Recycled_Brella.png"),

    main("ノヴァブラスター", "ブラスター", "Luna_Blaster.png"),
    main("ホットブラスター", "ブラスター", "Blaster.png"),
    main("ロングブラスター", "ブラスター", "Range_Blaster.png"),
    main("ラピッドブラスター", "ブラスター", "Rapid_Blaster.png"),
    main("Rブラスターエリート", "ブラスター", "Rapid_Blaster_Pro.png"),
    main("クラッシュブラスター", "ブラスター", "Clash_Blaster.png"),
    main("S-BLAST", "ブラスター", "S-BLAST.png"),

    main("パブロ", "フデ", "Inkbrush.png"),
    main("ホクサイ", "フデ", "Octobrush.png"),
    main("フィンセント", "フデ", "Painbrush.png"),

    main("トライストリンガー", "ストリンガー", "Tri-Stringer.png"),
    main("LACT-450", "ストリンガー", "REEF-LUX_450.png"),
    main("フルイドV", "ストリンガー", "Wellstring_V.png"),

    main("ドライブワイパー", "ワイパー", "Splatana_Wiper.png"),
    main("ジムワイパー", "ワイパー", "Splatana_Stamper.png"),
    main("デンタルワイパー", "ワイパー", "Mint_Decavitator.png"),
];

pub static SUB_WEAPONS: &[SubWeapon] = &[
    sub("スプラッシュボム", "Splat_Bomb.png"),
    sub("キューバンボム", "Suction_Bomb.png"),
    sub("クイックボム", "Burst_Bomb.png"),
    sub("スプリンクラー", "Sprinkler.png"),
    sub("スプラッシュシールド", "Splash_Wall.png"),
    sub("タンサンボム", "Fizzy_Bomb.png"),
    sub("カーリングボム", "Curling_Bomb.png"),
    sub("ロボットボム", "Autobomb.png"),
    sub("ジャンプビーコン", "Squid_Beakon.png"),
    sub("ポイントセンサー", "Point_Sensor.png"),
    sub("トラップ", "Ink_Mine.png"),
    sub("ポイズンミスト", "Toxic_Mist.png"),
    sub("ラインマーカー", "Angle_Shooter.png"),
    sub("トーピード", "Torpedo.png"),
];

pub static SPECIAL_WEAPONS: &[SpecialWeapon] = &[
    special("ウルトラショット", "Trizooka.png"),
    special("グレートバリア", "Big_Bubbler.png"),
    special("ショクワンダー", "Zipcaster.png"),
    special("マルチミサイル", "Tenta_Missiles.png"),
    special("アメフラシ", "Ink_Storm.png"),
    special("ナイスダマ", "Booyah_Bomb.png"),
    special("ホップソナー", "Wave_Breaker.png"),
    special("キューインキ", "Ink_Vac.png"),
    special("メガホンレーザー5.1ch", "Killer_Wail_5.1.png"),
    special("ジェットパック", "Inkjet.png"),
    special("ウルトラハンコ", "Ultra_Stamp.png"),
    special("カニタンク", "Crab_Tank.png"),
    special("サメライド", "Reefslider.png"),
    special("トリプルトルネード", "Triple_Inkstrike.png"),
    special("エナジースタンド", "Tacticooler.png"),
    special("テイオウイカ", "Kraken_Royale.png"),
    special("デコイチラシ", "Super_Chump.png"),
    special("スミナガシート", "Ink_Storm.png"),
    special("ウルトラチャクチ", "Triple_Splashdown.png"),
];

/// (main, sub, special) name triples that are not real in-game kits.
pub static EXCLUDED_KITS: &[(&str, &str, &str)] = &[
    ("わかばシューター", "スプラッシュボム", "グレートバリア"),
    ("わかばシューター", "トーピード", "ホップソナー"),
    ("スプラシューター", "キューバンボム", "ウルトラショット"),
    ("スプラシューター", "スプラッシュボム", "トリプルトルネード"),
    ("スプラシューター", "クイックボム", "テイオウイカ"),
    ("シャープマーカー", "クイックボム", "カニタンク"),
    ("シャープマーカー", "キューバンボム", "トリプルトルネード"),
    ("シャープマーカー", "ポイズンミスト", "アメフラシ"),
    ("プロモデラー", "タンサンボム", "サメライド"),
    ("プロモデラー", "スプリンクラー", "ナイスダマ"),
    ("プロモデラー", "クイックボム", "スミナガシート"),
    ("ボールドマーカー", "カーリングボム", "ウルトラハンコ"),
    ("ボールドマーカー", "ジャンプビーコン", "メガホンレーザー5.1ch"),
    (".52ガロン", "スプラッシュシールド", "メガホンレーザー5.1ch"),
    (".52ガロン", "カーリングボム", "スミナガシート"),
    ("N-ZAP", "キューバンボム", "エナジースタンド"),
    ("N-ZAP", "ロボットボム", "デコイチラシ"),
    ("プライムシューター", "ラインマーカー", "カニタンク"),
    ("プライムシューター", "キューバンボム", "ナイスダマ"),
    ("プライムシューター", "スプラッシュボム", "マルチミサイル"),
    (".96ガロン", "スプリンクラー", "キューインキ"),
    (".96ガロン", "スプラッシュシールド", "テイオウイカ"),
    (".96ガロン", "ラインマーカー", "エナジースタンド"),
    ("ジェットスイーパー", "ラインマーカー", "キューインキ"),
    ("ジェットスイーパー", "ポイズンミスト", "アメフラシ"),
    ("ジェットスイーパー", "クイックボム", "ウルトラチャクチ"),
    ("スペースシューター", "ポイントセンサー", "メガホンレーザー5.1ch"),
    ("スペースシューター", "トラップ", "ジェットパック"),
    ("L3リールガン", "カーリングボム", "カニタンク"),
    ("L3リールガン", "クイックボム", "ウルトラハンコ"),
    ("L3リールガン", "スプラッシュボム", "ジェットパック"),
    ("H3リールガン", "ポイントセンサー", "エナジースタンド"),
    ("H3リールガン", "スプラッシュシールド", "グレートバリア"),
    ("H3リールガン", "キューバンボム", "トリプルトルネード"),
    ("ボトルガイザー", "スプラッシュシールド", "ウルトラショット"),
    ("ボトルガイザー", "ロボットボム", "スミナガシート"),

    ("ホットブラスター", "ロボットボム", "グレートバリア"),
    ("ホットブラスター", "ポイントセンサー", "ウルトラチャクチ"),
    ("ホットブラスター", "ジャンプビーコン", "カニタンク"),
    ("ロングブラスター", "キューバンボム", "ホップソナー"),
    ("ラピッドブラスター", "トラップ", "トリプルトルネード"),
    ("ラピッドブラスター", "トーピード", "ジェットパック"),
    ("クラッシュブラスター", "スプラッシュボム", "ウルトラショット"),
    ("クラッシュブラスター", "カーリングボム", "デコイチラシ"),
    ("ノヴァブラスター", "スプラッシュボム", "ショクワンダー"),
    ("ノヴァブラスター", "タンサンボム", "ウルトラハンコ"),
    ("Rブラスターエリート", "ポイズンミスト", "キューインキ"),
    ("Rブラスターエリート", "ラインマーカー", "メガホンレーザー5.1ch"),
    ("Rブラスターエリート", "キューバンボム", "エナジースタンド"),
    ("S-BLAST", "クイックボム", "ナイスダマ"),
    ("S-BLAST", "スプリンクラー", "サメライド"),

    ("スプラローラー", "カーリングボム", "グレートバリア"),
    ("スプラローラー", "ジャンプビーコン", "テイオウイカ"),
    ("カーボンローラー", "ロボットボム", "ショクワンダー"),
    ("カーボンローラー", "クイックボム", "ウルトラショット"),
    ("カーボンローラー", "タンサンボム", "デコイチラシ"),
    ("ダイナモローラー", "スプリンクラー", "エナジースタンド"),
    ("ダイナモローラー", "スプラッシュボム", "デコイチラシ"),
    ("ヴァリアブルローラー", "トラップ", "マルチミサイル"),
    ("ヴァリアブルローラー", "キューバンボム", "スミナガシート"),
    ("ワイドローラー", "スプラッシュシールド", "キューインキ"),
    ("ワイドローラー", "ラインマーカー", "アメフラシ"),
    ("ワイドローラー", "トーピード", "ウルトラチャクチ"),

    ("パブロ", "スプラッシュボム", "メガホンレーザー5.1ch"),
    ("パブロ", "トラップ", "ウルトラハンコ"),
    ("ホクサイ", "キューバンボム", "ショクワンダー"),
    ("ホクサイ", "ジャンプビーコン", "アメフラシ"),
    ("ホクサイ", "ロボットボム", "テイオウイカ"),
    ("フィンセント", "カーリングボム", "ホップソナー"),
    ("フィンセント", "ポイントセンサー", "マルチミサイル"),
    ("フィンセント", "スプラッシュシールド", "ウルトラショット"),

    ("スプラチャージャー", "スプラッシュボム", "キューインキ"),
    ("スプラチャージャー", "スプリンクラー", "カニタンク"),
    ("スプラスコープ", "スプラッシュボム", "キューインキ"),
    ("スプラチャージャー", "スプラッシュシールド", "トリプルトルネード"),
    ("スプラスコープ", "スプラッシュシールド", "トリプルトルネード"),
    ("スプラスコープ", "スプリンクラー", "カニタンク"),
    ("リッター4K", "トラップ", "ホップソナー"),
    ("4Kスコープ", "トラップ", "ホップソナー"),
    ("リッター4K", "ジャンプビーコン", "テイオウイカ"),
    ("4Kスコープ", "ジャンプビーコン", "テイオウイカ"),
    ("14式竹筒銃", "ロボットボム", "メガホンレーザー5.1ch"),
    ("14式竹筒銃", "タンサンボム", "デコイチラシ"),
    ("ソイチューバー", "トーピード", "マルチミサイル"),
    ("ソイチューバー", "タンサンボム", "ウルトラハンコ"),
    ("スクイックリン", "ポイントセンサー", "グレートバリア"),
    ("スクイックリン", "ロボットボム", "ショクワンダー"),
    ("R-PEN", "スプリンクラー", "エナジースタンド"),
    ("R-PEN", "スプラッシュシールド", "アメフラシ"),

    ("バケットスロッシャー", "スプラッシュボム", "トリプルトルネード"),
    ("バケットスロッシャー", "ラインマーカー", "ショクワンダー"),
    ("ヒッセン", "ポイズンミスト", "ジェットパック"),
    ("ヒッセン", "タンサンボム", "エナジースタンド"),
    ("ヒッセン", "スプラッシュボム", "スミナガシート"),
    ("スクリュースロッシャー", "タンサンボム", "ナイスダマ"),
    ("スクリュースロッシャー", "ポイントセンサー", "ウルトラショット"),
    ("オーバーフロッシャー", "スプリンクラー", "アメフラシ"),
    ("オーバーフロッシャー", "ラインマーカー", "テイオウイカ"),
    ("エクスプロッシャー", "ポイントセンサー", "アメフラシ"),
    ("エクスプロッシャー", "スプラッシュシールド", "ウルトラチャクチ"),
    ("モップリン", "キューバンボム", "サメライド"),
    ("モップリン", "ジャンプビーコン", "ホップソナー"),
    ("モップリン", "カーリングボム", "カニタンク"),

    ("スプラスピナー", "クイックボム", "ウルトラハンコ"),
    ("スプラスピナー", "ポイズンミスト", "グレートバリア"),
    ("スプラスピナー", "ジャンプビーコン", "ウルトラショット"),
    ("バレルスピナー", "スプリンクラー", "ホップソナー"),
    ("バレルスピナー", "ポイントセンサー", "テイオウイカ"),
    ("ハイドラント", "ロボットボム", "ナイスダマ"),
    ("ハイドラント", "トラップ", "スミナガシート"),
    ("ハイドラント", "スプリンクラー", "グレートバリア"),
    ("クーゲルシュライバー", "タンサンボム", "ジェットパック"),
    ("クーゲルシュライバー", "ポイントセンサー", "キューインキ"),
    ("ノーチラス", "ポイントセンサー", "アメフラシ"),
    ("ノーチラス", "キューバンボム", "ウルトラショット"),
    ("イグザミナー", "カーリングボム", "エナジースタンド"),
    ("イグザミナー", "スプラッシュボム", "カニタンク"),

    ("スプラマニューバー", "キューバンボム", "カニタンク"),
    ("スプラマニューバー", "カーリングボム", "ウルトラチャクチ"),
    ("スプラマニューバー", "タンサンボム", "グレートバリア"),
    ("スパッタリー", "ジャンプビーコン", "エナジースタンド"),
    ("スパッタリー", "トーピード", "サメライド"),
    ("スパッタリー", "スプラッシュボム", "メガホンレーザー5.1ch"),
    ("デュアルスイーパー", "スプラッシュボム", "ホップソナー"),
    ("デュアルスイーパー", "ジャンプビーコン", "デコイチラシ"),
    ("デュアルスイーパー", "ポイントセンサー", "スミナガシート"),
    ("ケルビン525", "スプラッシュシールド", "ナイスダマ"),
    ("ケルビン525", "ポイントセンサー", "ウルトラショット"),
    ("クアッドホッパー", "ロボットボム", "サメライド"),
    ("クアッドホッパー", "スプリンクラー", "ショクワンダー"),
    ("ガエンFF", "トラップ", "メガホンレーザー5.1ch"),
    ("ガエンFF", "クイックボム", "トリプルトルネード"),

    ("パラシェルター", "スプリンクラー", "トリプルトルネード"),
    ("パラシェルター", "ロボットボム", "ジェットパック"),
    ("キャンピングシェルター", "ジャンプビーコン", "キューインキ"),
    ("キャンピングシェルター", "トラップ", "ウルトラショット"),
    ("キャンピングシェルター", "ポイズンミスト", "デコイチラシ"),
    ("スパイガジェット", "トラップ", "サメライド"),
    ("スパイガジェット", "トーピード", "スミナガシート"),
    ("スパイガジェット", "カーリングボム", "メガホンレーザー5.1ch"),
    ("24式張替傘", "ラインマーカー", "グレートバリア"),
    ("24式張替傘", "ポイズンミスト", "ウルトラチャクチ"),

    ("ドライブワイパー", "トーピード", "ウルトラハンコ"),
    ("ドライブワイパー", "ジャンプビーコン", "マルチミサイル"),
    ("ドライブワイパー", "カーリングボム", "ウルトラショット"),
    ("ジムワイパー", "クイックボム", "ショクワンダー"),
    ("ジムワイパー", "ポイズンミスト", "カニタンク"),
    ("ジムワイパー", "ロボットボム", "ナイスダマ"),
    ("デンタルワイパー", "キューバンボム", "グレートバリア"),
    ("デンタルワイパー", "スプラッシュシールド", "ジェットパック"),

    ("トライストリンガー", "ポイズンミスト", "メガホンレーザー5.1ch"),
    ("トライストリンガー", "スプリンクラー", "デコイチラシ"),
    ("トライストリンガー", "ラインマーカー", "ジェットパック"),
    ("LACT-450", "カーリングボム", "マルチミサイル"),
    ("LACT-450", "クイックボム", "サメライド"),
    ("LACT-450", "トーピード", "ナイスダマ"),
    ("フルイドV", "ポイントセンサー", "ウルトラハンコ"),
    ("フルイドV", "スプラッシュシールド", "ホップソナー"),
];

const fn main(name: &'static str, kind: &'static str, image: &'static str) -> MainWeapon {
    MainWeapon { name, kind, image }
}

const fn sub(name: &'static str, image: &'static str) -> SubWeapon {
    SubWeapon { name, image }
}

const fn special(name: &'static str, image: &'static str) -> SpecialWeapon {
    SpecialWeapon { name, image }
}
